pub mod label_name;
pub mod repository;

pub use label_name::LabelName;
pub use repository::Repository;
