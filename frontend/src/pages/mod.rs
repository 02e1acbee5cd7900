pub mod forgot_password;
pub mod jd_matcher;
pub mod reset_password;
pub mod resume_analysis;
