//! The template-go command-line executable.

mod app;

fn main() -> anyhow::Result<()> {
    app::run()
}
