//! Generate static files

use anyhow::Result;

use crate::generator::Generator;
use crate::Blog;

/// Generate the static site into the public directory
pub fn run(blog: &Blog) -> Result<()> {
    let start = std::time::Instant::now();

    let generator = Generator::new(blog)?;
    let count = generator.generate()?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} articles into {:?} in {:.2}s",
        count,
        blog.public_dir,
        duration.as_secs_f64()
    );

    Ok(())
}
