mod detail;
mod tree;

pub(super) use self::detail::render_detail;
pub(super) use self::tree::render_tree;
