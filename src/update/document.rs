//! Document update functions: typing, component insertion, templates

use crate::caret;
use crate::commands::Cmd;
use crate::component;
use crate::messages::DocumentMsg;
use crate::model::EditorSession;
use crate::template::TemplateId;

/// Handle document messages (content edits, insertion, templates)
pub fn update_document(session: &mut EditorSession, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::InsertText(text) => {
            // Typing replaces the empty-state hint
            if session.document.has_tip() {
                session.document.remove_tips();
                session.caret = None;
            }
            if session.caret.is_none() {
                session.document.normalize();
                session.caret = caret::place_caret_at_end(&session.document, None);
            }

            let caret_pos = session.caret.clone()?;
            let node = session.document.node_at_mut(&caret_pos.path)?;
            if !node.editable {
                return None;
            }

            let at = byte_offset(&node.text, caret_pos.offset);
            node.text.insert_str(at, &text);
            if let Some(c) = session.caret.as_mut() {
                c.offset += text.chars().count();
            }

            session.bump_revision();
            // Free typing coalesces into one trailing snapshot
            Some(Cmd::ScheduleSnapshot {
                revision: session.revision,
                delay_ms: session.config.snapshot_debounce_ms,
            })
        }

        DocumentMsg::DeleteBackward => {
            let caret_pos = session.caret.clone()?;
            if caret_pos.offset == 0 {
                // Block-local editing: no merge across block boundaries
                return None;
            }
            let node = session.document.node_at_mut(&caret_pos.path)?;
            if !node.editable {
                return None;
            }

            let start = byte_offset(&node.text, caret_pos.offset - 1);
            let end = byte_offset(&node.text, caret_pos.offset);
            node.text.replace_range(start..end, "");
            if let Some(c) = session.caret.as_mut() {
                c.offset -= 1;
            }

            session.bump_revision();
            Some(Cmd::ScheduleSnapshot {
                revision: session.revision,
                delay_ms: session.config.snapshot_debounce_ms,
            })
        }

        DocumentMsg::DropComponent { payload, target } => {
            let node = component::create_from_payload(&payload);

            match target {
                Some(path) if session.document.node_at(&path).is_some() => {
                    session.caret = caret::place_caret_at_end(&session.document, Some(&path));
                }
                Some(_) | None => {
                    // Drop position did not resolve; insert at caret end
                    // rather than failing the drop
                    tracing::debug!("drop position unresolved, falling back to caret end");
                    if session.caret.is_none() {
                        session.caret = caret::place_caret_at_end(&session.document, None);
                    }
                }
            }

            session.insert_component(node);
            Some(Cmd::Redraw)
        }

        DocumentMsg::InsertComponent(kind) => {
            session.insert_component(component::create(kind));
            Some(Cmd::Redraw)
        }

        DocumentMsg::ApplyTemplate(name) => {
            let template = TemplateId::parse(&name);
            if template.is_none() {
                tracing::debug!("unknown template '{}', using placeholder", name);
            }
            session.apply_template(template);
            Some(Cmd::Redraw)
        }

        DocumentMsg::Reset => {
            session.reset();
            Some(Cmd::Redraw)
        }

        DocumentMsg::SetTitle(title) => {
            // The title lives outside the tree; not checkpoint-worthy
            session.title = title;
            None
        }
    }
}

/// Byte index of the given char offset, clamped to the end of the text
fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_offset_handles_multibyte() {
        assert_eq!(byte_offset("café!", 0), 0);
        assert_eq!(byte_offset("café!", 3), 3);
        assert_eq!(byte_offset("café!", 4), 5);
        assert_eq!(byte_offset("café!", 99), 6);
    }
}
