mod text;

pub use text::render_report;
