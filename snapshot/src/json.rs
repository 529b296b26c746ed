use {
    crate::{bone::Bone, snapshot::BoneSnapshot},
    nalgebra as na,
};

/// Renders a snapshot as a JSON document.
///
/// Per node the key order is fixed: `name` always, `pos` (3-element
/// number array) only for mapped bones, `children` only when
/// non-empty. Bone names come from the closed set, so no escaping is
/// needed. Indentation is two spaces per level and purely cosmetic.
pub fn render(node: &BoneSnapshot) -> String {
    let mut out = String::new();
    render_node(node, 0, &mut out);
    out
}

fn render_node(node: &BoneSnapshot, level: usize, out: &mut String) {
    let pad = "  ".repeat(level);
    let pad1 = "  ".repeat(level + 1);

    out.push_str(&pad);
    out.push_str("{\n");

    out.push_str(&pad1);
    out.push_str("\"name\": \"");
    out.push_str(node.bone.name());
    out.push('"');

    if let Some(pos) = node.position {
        out.push_str(",\n");
        out.push_str(&pad1);
        out.push_str(&format!(
            "\"pos\": [{}, {}, {}]",
            pos.x, pos.y, pos.z
        ));
    }

    if !node.children.is_empty() {
        out.push_str(",\n");
        out.push_str(&pad1);
        out.push_str("\"children\": [\n");
        let mut first = true;
        for child in &node.children {
            if !first {
                out.push_str(",\n");
            }
            first = false;
            render_node(child, level + 2, out);
        }
        out.push('\n');
        out.push_str(&pad1);
        out.push(']');
    }

    out.push('\n');
    out.push_str(&pad);
    out.push('}');
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("node is not a JSON object")]
    NotAnObject,

    #[error("node object has no `name` string")]
    MissingName,

    #[error("`{0}` is not a humanoid bone name")]
    UnknownBone(String),

    #[error("`pos` of `{bone}` is not a 3-element number array")]
    BadPosition { bone: Bone },

    #[error("`children` of `{bone}` is not an array")]
    BadChildren { bone: Bone },
}

/// Parses a snapshot document produced by [`render`].
///
/// Accepts any whitespace layout. A missing `pos` key means the bone
/// was unmapped; a missing `children` key means a leaf.
pub fn parse(json: &str) -> Result<BoneSnapshot, ParseError> {
    let value = serde_json::from_str(json)?;
    parse_node(&value)
}

fn parse_node(
    value: &serde_json::Value,
) -> Result<BoneSnapshot, ParseError> {
    let object = value.as_object().ok_or(ParseError::NotAnObject)?;

    let name = object
        .get("name")
        .and_then(serde_json::Value::as_str)
        .ok_or(ParseError::MissingName)?;
    let bone = Bone::from_name(name)
        .ok_or_else(|| ParseError::UnknownBone(name.to_owned()))?;

    let position = match object.get("pos") {
        None => None,
        Some(pos) => Some(
            parse_position(pos)
                .ok_or(ParseError::BadPosition { bone })?,
        ),
    };

    let children = match object.get("children") {
        None => Vec::new(),
        Some(children) => children
            .as_array()
            .ok_or(ParseError::BadChildren { bone })?
            .iter()
            .map(parse_node)
            .collect::<Result<_, _>>()?,
    };

    Ok(BoneSnapshot {
        bone,
        position,
        children,
    })
}

fn parse_position(
    value: &serde_json::Value,
) -> Option<na::Vector3<f32>> {
    match value.as_array()?.as_slice() {
        [x, y, z] => Some(na::Vector3::new(
            x.as_f64()? as f32,
            y.as_f64()? as f32,
            z.as_f64()? as f32,
        )),
        _ => None,
    }
}
