pub mod compare;
pub mod count;
pub mod dispatch;
pub mod sample;
pub mod translate;
pub mod validate;
