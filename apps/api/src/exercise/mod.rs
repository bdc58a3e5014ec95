// Exercise recommendation: body-part mapping → reference lookup →
// similarity neighbors → goal/level score adjustment → top-3 titles.

pub mod bodypart;
pub mod engine;
pub mod handlers;
pub mod recommender;
