//! End-to-end checks of the generation pipeline on hand-built responses,
//! wired together the same way the `generate` command does it: compose the
//! prompt, extract the image, record it in the gallery, write it to disk.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::apis::{extract_image, Candidate, Content, GenerationResponse, InlineData, Part};
use crate::history::{HistoryRecord, HistoryStore};
use crate::prompt::{compose_prompt, StyleTag};
use crate::utils::{image_filename, write_image};

fn png_response(bytes: &[u8]) -> GenerationResponse {
    GenerationResponse {
        candidates: vec![Candidate {
            content: Content {
                parts: vec![
                    Part::Text {
                        text: "here you go".to_string(),
                    },
                    Part::Inline {
                        inline_data: InlineData {
                            mime_type: "image/png".to_string(),
                            data: BASE64.encode(bytes),
                        },
                    },
                ],
            },
        }],
    }
}

#[test]
fn watercolor_generation_lands_in_the_gallery() {
    let prompt = "cat on a beach";
    let composed = compose_prompt(prompt, StyleTag::Watercolor).unwrap();
    assert!(composed.contains("水彩画風"));
    assert!(composed.contains(prompt));

    let response = png_response(&[7u8; 10]);
    let image = extract_image(&response).unwrap();

    let mut history = HistoryStore::new();
    history.append(HistoryRecord {
        image: image.bytes,
        mime_type: image.mime_type,
        prompt: prompt.to_string(),
        timestamp: 1_700_000_000,
    });

    assert_eq!(history.len(), 1);
    let record = history.newest_first().next().unwrap();
    assert_eq!(record.mime_type, "image/png");
    assert_eq!(record.image.len(), 10);
    assert_eq!(record.prompt, prompt);
}

#[test]
fn extracted_image_round_trips_to_disk() {
    let response = png_response(b"fake png contents");
    let image = extract_image(&response).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = write_image(dir.path(), &image_filename(1_700_000_000), &image.bytes).unwrap();
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "enjoy_banana_1700000000.png"
    );
    assert_eq!(std::fs::read(path).unwrap(), b"fake png contents");
}

#[test]
fn empty_prompt_never_reaches_the_network() {
    // Validation happens before any client call; composing fails and the
    // pipeline stops there.
    assert!(compose_prompt("   ", StyleTag::Cyberpunk).is_err());
}
