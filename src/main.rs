//! Mock chat conversation
//!
//! Builds one message of every content kind and logs the bubble geometry each
//! one computes for the given viewport width.

use std::path::PathBuf;

use chatkit::{
    AudioContent, AudioItem, ContactContent, Coordinate, DurationLookup, FontWeight, Image,
    ImageContent, KnownDuration, LocationContent, Message, MessageKind, Sender, SizingConfig,
    SizingContext, StyledText, StyledTextItem, TemplateContent, TemplateItem, TextStyle,
    WavDuration,
};
use chatkit_text::Measurer;
use chrono::{Duration, Utc};
use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};

const SAMPLE_TEXTS: &[&str] = &[
    "Hey, are we still on for tonight?",
    "Sounds good!",
    "I just got back from the market and they had the peaches you were talking about, so I picked up a whole box.",
    "Can you send me the address again? My phone lost the thread.",
    "",
];

const SAMPLE_ACTIONS: &[&str] = &["View details", "Reply", "Open in maps"];

#[derive(Parser, Debug)]
#[command(about = "Compute chat bubble geometry for a mock conversation")]
struct Args {
    /// Width available to the message list, in points
    #[arg(long, default_value_t = 375.0)]
    viewport_width: f32,

    /// WAV file whose duration is probed for audio messages
    #[arg(long)]
    audio: Option<PathBuf>,

    /// Seed for picking sample texts
    #[arg(long)]
    seed: Option<u64>,
}

fn users() -> [Sender; 3] {
    [
        Sender::new("000001", "Avery Quinn"),
        Sender::new("000002", "Rowan Ellis"),
        Sender::new("000003", "Sam Okafor"),
    ]
}

fn sample_text(rng: &mut impl Rng) -> &'static str {
    SAMPLE_TEXTS[rng.random_range(0..SAMPLE_TEXTS.len())]
}

/// Build one message per content kind, a minute apart
fn mock_conversation(
    rng: &mut impl Rng,
    ctx: &mut SizingContext<'_>,
    durations: &mut dyn DurationLookup,
    audio_url: PathBuf,
) -> Vec<Message> {
    let config = ctx.config;
    let users = users();
    let start = Utc::now() - Duration::minutes(10);

    let kinds = vec![
        MessageKind::Text(sample_text(rng).to_string()),
        MessageKind::StyledText(StyledText::new(
            "Bold claim",
            TextStyle::default().with_weight(FontWeight::Bold),
        )),
        MessageKind::Photo(ImageContent::new(Image::named("harbor", 1200, 900), config)),
        MessageKind::Video(ImageContent::new(Image::named("street-band", 1280, 720), config)),
        MessageKind::Location(LocationContent::new(
            Coordinate::new(37.3318, -122.0312),
            config,
        )),
        MessageKind::Emoji("🙂🎉".to_string()),
        MessageKind::Audio(AudioContent::new(
            None,
            "",
            audio_url.clone(),
            ctx,
            durations,
        )),
        MessageKind::Audio(AudioContent::new(
            Some(Image::named("album-cover", 600, 450)),
            sample_text(rng),
            audio_url,
            ctx,
            durations,
        )),
        MessageKind::Contact(
            ContactContent::new("Casey Morgan", "CM")
                .with_phone_numbers(vec!["+1-202-555-0118".to_string()]),
        ),
        MessageKind::Template(TemplateContent::new(
            Some(Image::named("album-cover", 600, 450)),
            sample_text(rng),
            Some(SAMPLE_ACTIONS[rng.random_range(0..SAMPLE_ACTIONS.len())]),
            ctx,
        )),
    ];

    kinds
        .into_iter()
        .enumerate()
        .map(|(i, kind)| {
            Message::new(
                kind,
                users[i % users.len()].clone(),
                format!("{:06}", i + 1),
                start + Duration::minutes(i as i64),
            )
        })
        .collect()
}

fn describe(message: &Message) {
    let name = message.kind.name();
    let Some(size) = message.bubble_size() else {
        log::info!("{} [{}] sized by host", message.message_id, name);
        return;
    };

    log::info!(
        "{} [{}] from {}: {}x{}",
        message.message_id,
        name,
        message.sender.display_name,
        size.width,
        size.height
    );

    match &message.kind {
        MessageKind::Audio(item) => log::info!(
            "    image {} + text {} + control {} ({:.1}s)",
            item.image_height(),
            item.text_area_height(),
            item.audio_control_size().height,
            item.audio_duration()
        ),
        MessageKind::Template(item) => log::info!(
            "    image {} + text {} + action {}",
            item.image_height(),
            item.text_area_height(),
            item.secondary_area_height()
        ),
        _ => {}
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let config = SizingConfig::default();
    let mut measurer = Measurer::new_default();
    let mut ctx = SizingContext::new(args.viewport_width, &config, &mut measurer);

    let (mut durations, audio_url): (Box<dyn DurationLookup>, PathBuf) = match args.audio {
        Some(path) => (Box::new(WavDuration::new()), path),
        None => (Box::new(KnownDuration(12.0)), PathBuf::from("sound1.m4a")),
    };

    log::info!("Laying out mock conversation at {}pt", args.viewport_width);

    let messages = mock_conversation(&mut rng, &mut ctx, durations.as_mut(), audio_url);
    for message in &messages {
        describe(message);
    }
}
