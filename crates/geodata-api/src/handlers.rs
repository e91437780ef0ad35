mod files;
mod health;
mod measure;
mod points;
mod users;

pub use files::{get_file, list_files, upload_file};
pub use health::health_check;
pub use measure::{
    create_measure, delete_measure, get_measure, record_click, reset_measure, toggle_unit,
};
pub use points::{create_point, list_points};
pub use users::{create_user, get_user, list_users};
