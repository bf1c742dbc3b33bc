use crate::LayoutError;
use tracing::error;

/// Reply to `GetLayout`: the menu revision and the layout as XML text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutResponse {
    /// Revision counter of the exported menu. Sent as `int32` or `uint32`
    /// depending on the service, so widened to hold either.
    pub revision: i64,

    /// The raw layout document, e.g. `<menu id="0"><menu id="1"/></menu>`.
    pub layout: String,
}

/// The two node ids a benchmark pass needs from a layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LayoutIds {
    /// `id` of the root element.
    pub root_id: i32,

    /// `id` of the first `menu` element below the root.
    pub child_id: i32,
}

/// Extracts the root id and the first child id from a layout document.
///
/// The child is the first element named `menu` found by a pre-order walk
/// below the root (document order, root excluded). The walk stops there:
/// if that element has no `id`, the layout is rejected rather than trying
/// later elements.
pub fn parse_layout(layout: &str) -> Result<LayoutIds, LayoutError> {
    let document = roxmltree::Document::parse(layout).map_err(|e| {
        error!("Unable to parse layout XML: {:?}", e);
        LayoutError::from(e)
    })?;
    let root = document.root_element();
    let root_id = parse_id(root.attribute("id").ok_or(LayoutError::MissingRootId)?)?;

    let child = root
        .descendants()
        .skip(1)
        .find(|node| node.is_element() && node.has_tag_name("menu"))
        .ok_or(LayoutError::NoChildMenu)?;
    let child_id = parse_id(child.attribute("id").ok_or(LayoutError::MissingChildId)?)?;

    Ok(LayoutIds { root_id, child_id })
}

fn parse_id(raw: &str) -> Result<i32, LayoutError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| LayoutError::InvalidId(raw.to_string()))
}
