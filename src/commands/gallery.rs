use crate::session::Session;
use crate::utils::truncate_prompt;

/// List this session's generations, newest first.
pub fn gallery(session: &Session) {
    if session.history.is_empty() {
        println!("No generations yet this session.");
        return;
    }

    println!("Gallery — {} image(s), newest first:", session.history.len());
    for (i, record) in session.history.newest_first().enumerate() {
        println!(
            "{:>3}. [{}] {} ({}, {} bytes)",
            i + 1,
            record.timestamp,
            truncate_prompt(&record.prompt, 60),
            record.mime_type,
            record.image.len()
        );
    }
    println!("Use `save <n>` to write a gallery image to disk.");
}
