use super::*;

mod comments_edge;
mod logging_more;
