mod arrays;
mod monitors;

pub use arrays::ArraysPage;
pub use monitors::MonitorsPage;
