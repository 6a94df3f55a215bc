use anyhow::Context;

use gcodeplay::{
    init_logging, parse, shared_surface, PlaybackSettings, Player, RasterSurface, Sample,
};

/// Usage: `gcodeplay [square|star|<program-file>] [delay-ms] [output.png]`
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let args: Vec<String> = std::env::args().skip(1).collect();

    let source = args.first().map(String::as_str).unwrap_or("square");
    let text = match Sample::from_name(source) {
        Some(sample) => sample.text().to_string(),
        None => std::fs::read_to_string(source)
            .with_context(|| format!("failed to read program '{}'", source))?,
    };

    let settings = match args.get(1) {
        Some(raw) => {
            let delay_ms: u64 = raw
                .parse()
                .with_context(|| format!("invalid delay '{}'", raw))?;
            PlaybackSettings::with_delay(delay_ms)?
        }
        None => PlaybackSettings::default(),
    };

    let output = args.get(2).map(String::as_str).unwrap_or("toolpath.png");

    let program = parse(&text);
    tracing::info!(
        source,
        commands = program.len(),
        delay_ms = settings.step_delay_ms,
        "replaying program"
    );

    let mut player = Player::new(shared_surface(RasterSurface::new()));
    player.play(program, &settings);
    player.wait().await;

    let bytes = player.export_image()?;
    std::fs::write(output, &bytes).with_context(|| format!("failed to write '{}'", output))?;
    tracing::info!(output, "wrote toolpath image");

    Ok(())
}
