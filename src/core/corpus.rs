//! The fixed corpus of code-like snippets the animation types out.
//!
//! Compiled in, not user-configurable.  The only invalid configuration is an
//! empty corpus, which is rejected once at startup.

use thiserror::Error;

/// Snippets shown on the animated rows.  Deliberately a grab-bag of
/// languages so the background reads as "code" rather than any one project.
pub const SNIPPETS: &[&str] = &[
    "func buildExperience() -> UIViewController { }",
    "let future = async { await success() }",
    "Widget build(BuildContext context) {",
    "Provider.of<ThemeData>(context, listen: false)",
    "@State private var isAnimating: Bool = false",
    "void update(float deltaTime) { render(scene); }",
    "struct ContentView: View { var body: some View {",
    "if (isAwesome) { portfolio.ship() }",
    "useEffect(() => { animate(entry) }, [visible])",
    "let skills: [String] = [\"Swift\", \"Flutter\", \"Unity\"]",
    "@Published var projects: [Project] = []",
    "GameScene.run(SKAction.repeatForever(.rotate))",
    "import SwiftUI // Crafting native experiences",
    "flutter pub get && flutter run --release",
    "Navigator.pushNamed(context, '/projects')",
    "git commit -m 'feat: ship something great'",
];

/// Startup configuration errors.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("snippet corpus is empty")]
    Empty,
}

/// Validate the corpus once at startup.  An empty corpus would make every
/// row degenerate, so it is treated as a configuration bug, not a runtime
/// condition.
pub fn validate(snippets: &[&str]) -> Result<(), CorpusError> {
    if snippets.is_empty() {
        return Err(CorpusError::Empty);
    }
    Ok(())
}

/// Pick a snippet uniformly at random.  Repeats are allowed — a row may
/// re-draw the same line it just faded out.
pub fn pick(rng: &mut fastrand::Rng, snippets: &'static [&'static str]) -> &'static str {
    snippets[rng.usize(..snippets.len())]
}
