use anyhow::Result;

use crate::session::Session;
use crate::utils::{gallery_filename, write_image};

/// Write gallery item `index` (1-based, newest first, as printed by
/// `gallery`) to the output directory.
pub fn save(session: &Session, index: usize) -> Result<()> {
    if index == 0 {
        println!("Gallery indexes start at 1.");
        return Ok(());
    }

    match session.history.newest_first().nth(index - 1) {
        Some(record) => {
            let filename = gallery_filename(record.timestamp, index);
            let path = write_image(&session.out_dir, &filename, &record.image)?;
            println!("Saved {}", path.display());
        }
        None => println!(
            "No gallery item {index} (the gallery has {} image(s)).",
            session.history.len()
        ),
    }

    Ok(())
}
