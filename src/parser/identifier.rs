use crate::model::{MemberIdentifier, MemberKind};

/// Parses a member name such as `M:App.Player.Jump(System.Single)`.
///
/// Returns `None` unless the name splits into exactly two parts on `:`.
/// Namespace-level and assembly-level entries use other shapes and are
/// dropped here. Unknown kind codes parse fine and come back as
/// [`MemberKind::Other`].
pub fn parse_identifier(raw: &str) -> Option<MemberIdentifier> {
    let mut parts = raw.split(':');
    let (code, path) = match (parts.next(), parts.next(), parts.next()) {
        (Some(code), Some(path), None) => (code, path),
        _ => return None,
    };

    let kind = MemberKind::from_code(code);

    let (owner, member, signature) = if kind == MemberKind::Type {
        (path, None, None)
    } else {
        let (base, signature) = split_signature(path);
        match base.rsplit_once('.') {
            Some((owner, member)) => (owner, Some(member), signature),
            None => (base, None, signature),
        }
    };

    Some(MemberIdentifier {
        kind,
        owner: owner.to_string(),
        member: member.map(str::to_string),
        signature: signature.map(str::to_string),
        namespace: namespace_of(owner).to_string(),
    })
}

/// Namespace part of an owner name: everything before its last dot.
pub fn namespace_of(owner: &str) -> &str {
    owner.rsplit_once('.').map_or("", |(namespace, _)| namespace)
}

// Parameter types are dotted too, so the list has to go before the last
// dot is looked up. Conversion operators carry a `~ReturnType` suffix after
// the list; it stays with the signature.
fn split_signature(path: &str) -> (&str, Option<&str>) {
    match path.find('(') {
        Some(index) => (&path[..index], Some(&path[index..])),
        None => (path, None),
    }
}
