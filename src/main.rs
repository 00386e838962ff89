use std::env;
use std::fs;
use std::io::Write;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: chordgen <input.chords> [output.mid]");
        process::exit(1);
    }

    let input_path = &args[1];
    let output_path = args.get(2);

    // Read input file
    let source = match fs::read_to_string(input_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", input_path, e);
            process::exit(1);
        }
    };

    // Compile
    let midi_bytes = match chordgen::compile(&source) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Compilation error: {}", e);
            process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &midi_bytes) {
                eprintln!("Error writing to '{}': {}", path, e);
                process::exit(1);
            }
            eprintln!("Wrote MIDI to {}", path);
        }
        None => {
            if let Err(e) = std::io::stdout().write_all(&midi_bytes) {
                eprintln!("Error writing to stdout: {}", e);
                process::exit(1);
            }
        }
    }
}
