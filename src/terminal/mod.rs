//! Terminal presenter: raw-mode session and single-write frame output.

mod output;
mod session;

pub use output::OutputBuffer;
pub use session::Terminal;
