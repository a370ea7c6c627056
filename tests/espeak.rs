#![cfg(feature = "espeak")]

use read_aloud::tokio::{parse_voice_list, pitch_arg, words_per_minute};
use read_aloud::tts::{Pitch, Rate};

const LISTING: &str = "\
Pty Language       Age/Gender VoiceName          File                 Other Languages
 5  af              --/M      Afrikaans          gmw/af
 5  en-gb           --/M      English_(Great_Britain) gmw/en            (en 2)
 2  en-us           --/M      English_(America)  gmw/en-US            (en 3)
 5  ko              --/M      Korean             ko
";

#[test]
fn test_voice_listing_is_parsed() {
    let voices = parse_voice_list(LISTING);
    assert_eq!(4, voices.len());

    assert_eq!("gmw/en-US", voices[2].uri());
    assert_eq!("English (America)", voices[2].name());
    assert_eq!("en-us", voices[2].language());

    assert_eq!("ko", voices[3].uri());
    assert_eq!("Korean", voices[3].name());
}

#[test]
fn test_malformed_lines_are_skipped() {
    assert!(parse_voice_list("").is_empty());
    assert!(parse_voice_list("Pty Language Age/Gender VoiceName File").is_empty());
    assert!(parse_voice_list(" 5  af  --/M\n").is_empty());
}

#[test]
fn test_pitch_maps_onto_espeak_scale() {
    assert_eq!(50, pitch_arg(Pitch::new(1.0)));
    assert_eq!(25, pitch_arg(Pitch::new(0.5)));
    assert_eq!(99, pitch_arg(Pitch::new(2.0)));
}

#[test]
fn test_rate_maps_onto_words_per_minute() {
    assert_eq!(175, words_per_minute(Rate::new(1.0)));
    assert_eq!(350, words_per_minute(Rate::new(2.0)));
    assert_eq!(88, words_per_minute(Rate::new(0.5)));
}
