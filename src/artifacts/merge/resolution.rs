//! Per-file three-way merge decisions
//!
//! Every path tracked by the head, the other branch or the split point is classified by
//! comparing the blob IDs the three commits hold for it. Blob IDs fold in the path, so equal IDs
//! for the same path mean equal content.

use crate::artifacts::objects::object_id::ObjectId;

/// What a merge does with one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Leave the head's version (or absence) untouched
    KeepHead,
    /// Write the other branch's version and stage it for addition
    TakeOther(ObjectId),
    /// Delete the working file and stage its removal
    Delete(ObjectId),
    /// Both sides changed the path differently
    Conflict {
        head: Option<ObjectId>,
        other: Option<ObjectId>,
    },
}

/// Classify one path from the blob IDs held by the head, the other branch and the split point
pub fn classify(
    head: Option<&ObjectId>,
    other: Option<&ObjectId>,
    split: Option<&ObjectId>,
) -> Resolution {
    // the other branch did not touch the path, or both sides made the same change
    if other == split || head == other {
        return Resolution::KeepHead;
    }

    match (head, other) {
        // only the other branch touched the path
        (_, Some(other)) if head == split => Resolution::TakeOther(other.clone()),
        (Some(head), None) if Some(head) == split => Resolution::Delete(head.clone()),
        _ => Resolution::Conflict {
            head: head.cloned(),
            other: other.cloned(),
        },
    }
}

/// Content of a conflicted file
///
/// A side without a trailing newline gets one so every marker starts its own line. An absent
/// side contributes nothing.
pub fn conflict_content(head: Option<&[u8]>, other: Option<&[u8]>) -> Vec<u8> {
    let mut content = Vec::new();

    content.extend_from_slice(b"<<<<<<< HEAD\n");
    push_side(&mut content, head);
    content.extend_from_slice(b"=======\n");
    push_side(&mut content, other);
    content.extend_from_slice(b">>>>>>>\n");

    content
}

fn push_side(content: &mut Vec<u8>, side: Option<&[u8]>) {
    if let Some(side) = side
        && !side.is_empty()
    {
        content.extend_from_slice(side);
        if !side.ends_with(b"\n") {
            content.push(b'\n');
        }
    }
}
