use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};

use crate::apis::{diagnostic_text, extract_image};
use crate::errors::{classify, GenerateError};
use crate::history::HistoryRecord;
use crate::prompt::{compose_prompt, StyleTag};
use crate::session::Session;
use crate::utils::{epoch_seconds, image_filename, write_image};

/// One user-triggered generation: compose the prompt, make the single API
/// call, pull the image out of the response, save it and record it in the
/// gallery. Every failure is reported and the session carries on.
pub async fn generate(session: &mut Session, prompt: &str) -> Result<()> {
    let final_prompt = match compose_prompt(prompt, session.style) {
        Ok(p) => p,
        Err(_) => {
            println!("Please enter a description of the image to generate.");
            return Ok(());
        }
    };

    if session.style != StyleTag::None {
        info!("composing with style {}", session.style);
    }

    println!("Generating image... (this can take around 30 seconds)");

    let started = Instant::now();
    let response = match session.client.generate(&final_prompt).await {
        Ok(response) => response,
        Err(e) => {
            report_failure(&e);
            return Ok(());
        }
    };
    let elapsed = started.elapsed().as_secs_f32();

    match extract_image(&response) {
        Some(image) => {
            let timestamp = epoch_seconds();
            let path = write_image(
                &session.out_dir,
                &image_filename(timestamp),
                &image.bytes,
            )?;
            info!(
                "generation took {:.1}s ({} bytes, {})",
                elapsed,
                image.bytes.len(),
                image.mime_type
            );
            println!(
                "Done in {}s — saved {} ({})",
                (elapsed * 10.0).round() / 10.0,
                path.display(),
                image.mime_type
            );
            session.history.append(HistoryRecord {
                image: image.bytes,
                mime_type: image.mime_type,
                // The gallery records what the user typed, not the composed
                // instruction.
                prompt: prompt.to_string(),
                timestamp,
            });
        }
        None => {
            warn!("response contained no inline image part");
            println!("Image generation failed.");
            if let Some(text) = diagnostic_text(&response) {
                println!("Model response: {text}");
            }
        }
    }

    Ok(())
}

fn report_failure(err: &GenerateError) {
    let category = classify(&err.to_string());
    warn!("generation failed ({:?})", category);
    println!("Error: {err}");
    println!("[{}] {}", category.title(), category.remediation());
}
