//! 预导入模块，方便使用

pub use super::admin_scores::{
    ActiveModel as AdminScoreActiveModel, Entity as AdminScores, Model as AdminScoreModel,
};
pub use super::admin_users::{
    ActiveModel as AdminUserActiveModel, Entity as AdminUsers, Model as AdminUserModel,
};
pub use super::faculty_submissions::{
    ActiveModel as FacultySubmissionActiveModel, Entity as FacultySubmissions,
    Model as FacultySubmissionModel,
};
pub use super::faculty_users::{
    ActiveModel as FacultyUserActiveModel, Entity as FacultyUsers, Model as FacultyUserModel,
};
