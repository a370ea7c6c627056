//! A terminal front-end for the reader, backed by espeak-ng. Every command typed on the standard
//! input is turned into the input event of one of the reader's controls, and the view is printed
//! again after every change. Set `RUST_LOG=read_aloud=debug` to watch the state transitions.

use std::sync::{Arc, Mutex};

use read_aloud::tokio::{reader_channel, EspeakCapability, ReaderHandle};
use read_aloud::{Reader, ReaderConfig, UserInput};
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

const HELP: &str = r#"
Commands:
  text <words>   replace the text to read
  voice <n>      select the n-th voice
  pitch <value>  set the pitch (0.5 to 2.0)
  rate <value>   set the rate of speech (0.5 to 2.0)
  speak          start or stop reading
  download       download the speech
  clear          clear the text
  quit           exit
"#;

fn parse_command(line: &str, voices: &[String]) -> Option<UserInput> {
    let line = line.trim();
    let (command, arg) = match line.split_once(' ') {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    };

    match command {
        "text" => Some(UserInput::EditText(arg.to_string())),
        "voice" => {
            // Voices are numbered from 1 in the view.
            let idx = arg.parse::<usize>().ok()?.checked_sub(1)?;
            voices.get(idx).map(|uri| UserInput::SelectVoice(Some(uri.clone())))
        }
        "pitch" => arg.parse().ok().map(UserInput::SetPitch),
        "rate" => arg.parse().ok().map(UserInput::SetRate),
        "speak" => Some(UserInput::ToggleSpeech),
        "download" => Some(UserInput::Download),
        "clear" => Some(UserInput::Clear),
        _ => None,
    }
}

async fn read_commands(handle: ReaderHandle, voices: Arc<Mutex<Vec<String>>>) {
    let mut lines = BufReader::new(stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        if line.trim() == "quit" {
            break;
        }
        let voices = voices.lock().unwrap().clone();
        match parse_command(&line, &voices) {
            Some(input) => {
                handle.send_input(input);
            }
            None => println!("{}", HELP),
        }
    }
    handle.shutdown();
}

#[tokio::main]
async fn main() {
    // Log to stderr so the log does not interleave with the rendered view.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("{}", HELP);

    // The handle is both the capability's event handler and the source of user input.
    let (handle, events) = reader_channel();
    let capability = EspeakCapability::detect(handle.clone());
    let reader = Reader::new(ReaderConfig::from_env(), capability);

    let voices = Arc::new(Mutex::new(Vec::new()));
    let input = tokio::spawn(read_commands(handle, voices.clone()));

    events
        .run(reader, |view| {
            *voices.lock().unwrap() = view.voices.iter().map(|voice| voice.uri.clone()).collect();
            println!("{}\n", view);
        })
        .await;

    input.abort();
}
