//! Ladder Bot CLI
//!
//! Interactive command-line interface for the word ladder solver.

use ladder_bot::{
    edit_distance_within, is_adjacent, load_dictionary, load_dictionary_from_path, LadderSolver,
};
use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

const BANNER_TEXT: &str = include_str!("text/banner.txt");
const USAGE_TEXT: &str = include_str!("text/usage.txt");

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut i = 0;
            while running_clone.load(Ordering::Relaxed) {
                print!("\r{} {}", frames[i % frames.len()], message);
                io::stdout().flush().unwrap();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            print!("\r{}\r", " ".repeat(message.len() + 3));
            io::stdout().flush().unwrap();
        });
        Self { running, handle: Some(handle) }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn print_banner() {
    for line in BANNER_TEXT.lines().take(6) {
        println!("{}", line);
    }
}

fn print_help() {
    println!("{}", BANNER_TEXT);
}

fn print_ladder(ladder: &[String]) {
    if ladder.is_empty() {
        println!("No ladder found.");
        return;
    }

    println!("Found a ladder of {} words ({} hops):", ladder.len(), ladder.len() - 1);
    println!("  {}", ladder.join(" -> "));
}

fn print_distribution(distribution: &[(usize, usize)]) {
    let total: usize = distribution.iter().map(|(_, c)| c).sum();
    let reachable: usize = distribution
        .iter()
        .filter(|(length, _)| *length > 0)
        .map(|(_, c)| c)
        .sum();

    println!("Ladder length distribution:");
    for (length, count) in distribution {
        let pct = *count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / total).max(1));
        if *length == 0 {
            println!("  unreachable: {:>5} ({:>5.1}%) {}", count, pct, bar);
        } else {
            println!("  {:>2} words: {:>5} ({:>5.1}%) {}", length, count, pct, bar);
        }
    }
    println!();
    println!("Reachable words: {} of {}", reachable, total);
}

fn run_interactive() {
    print_banner();

    println!("Loading dictionary...");
    let words = load_dictionary();
    println!("Loaded {} words.", words.len());
    println!();

    let mut solver = LadderSolver::new(words);
    println!("Type 'help' for commands or 'ladder <start> <end>' to get started.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush().unwrap();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap() == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => {
                print_help();
            }
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "ladder" | "l" => {
                if parts.len() < 3 {
                    println!("Usage: ladder <start> <end>");
                    continue;
                }

                let start = parts[1].to_lowercase();
                let end = parts[2].to_lowercase();

                if !solver.contains(&end) {
                    println!("'{}' is not in the dictionary; no ladder can end there.", end);
                    continue;
                }

                println!();
                print_ladder(&solver.shortest_ladder(&start, &end));
                println!();
            }
            "adjacent" | "adj" | "a" => {
                if parts.len() < 3 {
                    println!("Usage: adjacent <word1> <word2>");
                    continue;
                }

                let word1 = parts[1].to_lowercase();
                let word2 = parts[2].to_lowercase();

                if is_adjacent(&word1, &word2) {
                    println!("{} and {} are one edit apart.", word1, word2);
                } else {
                    println!("{} and {} are NOT one edit apart.", word1, word2);
                }
            }
            "distance" | "dist" | "d" => {
                if parts.len() < 4 {
                    println!("Usage: distance <word1> <word2> <max>");
                    println!("Example: distance kitten sitting 3");
                    continue;
                }

                let word1 = parts[1].to_lowercase();
                let word2 = parts[2].to_lowercase();
                let max: usize = match parts[3].parse() {
                    Ok(max) => max,
                    Err(_) => {
                        println!("Invalid distance bound: {}", parts[3]);
                        continue;
                    }
                };

                if edit_distance_within(&word1, &word2, max) {
                    println!("{} and {} are within edit distance {}.", word1, word2, max);
                } else {
                    println!("{} and {} are more than {} edits apart.", word1, word2, max);
                }
            }
            "neighbors" | "n" => {
                if parts.len() < 2 {
                    println!("Usage: neighbors <word>");
                    continue;
                }

                let word = parts[1].to_lowercase();
                let neighbors = solver.neighbors(&word);

                if neighbors.is_empty() {
                    println!("No dictionary words are one edit from '{}'.", word);
                } else {
                    println!();
                    println!("{} neighbors of '{}':", neighbors.len(), word);
                    for (i, neighbor) in neighbors.iter().enumerate() {
                        if i > 0 && i % 10 == 0 {
                            println!();
                        }
                        print!("{:>8}", neighbor);
                    }
                    println!();
                    println!();
                }
            }
            "verify" | "v" => {
                if parts.len() < 3 {
                    println!("Usage: verify <word> <word> [word...]");
                    continue;
                }

                let ladder: Vec<String> = parts[1..].iter().map(|s| s.to_lowercase()).collect();

                if solver.verify_ladder(&ladder) {
                    println!("Valid ladder of {} words.", ladder.len());
                } else {
                    println!("Not a valid ladder.");
                }
            }
            "benchmark" | "bench" | "b" => {
                if parts.len() < 2 {
                    println!("Usage: benchmark <word>");
                    continue;
                }

                let start = parts[1].to_lowercase();

                println!();
                println!(
                    "Searching ladders from '{}' to all {} words...",
                    start,
                    solver.word_count()
                );

                let spinner = Spinner::new("Computing...");
                let started = std::time::Instant::now();
                let distribution = solver.ladder_length_distribution(&start);
                let average = solver.average_ladder_length(&start);
                let elapsed = started.elapsed();
                spinner.stop();

                print_distribution(&distribution);
                println!("Average ladder length: {:.3}", average);
                println!("Time elapsed: {:.2?}", elapsed);
                println!();
            }
            "words" | "count" | "w" => {
                println!("Dictionary contains {} words.", solver.word_count());
            }
            "load" => {
                if parts.len() < 2 {
                    println!("Usage: load <path>");
                    continue;
                }

                match load_dictionary_from_path(parts[1]) {
                    Ok(words) => {
                        solver = LadderSolver::new(words);
                        println!("Loaded {} words from {}.", solver.word_count(), parts[1]);
                    }
                    Err(e) => {
                        println!("Could not load {}: {}", parts[1], e);
                    }
                }
            }
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
            }
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" => {
                println!("{}", USAGE_TEXT);
            }
            "ladder" => {
                if args.len() < 4 {
                    eprintln!("Usage: ladder-bot ladder <start> <end>");
                    std::process::exit(1);
                }

                let start = args[2].to_lowercase();
                let end = args[3].to_lowercase();

                let words = load_dictionary();
                let solver = LadderSolver::new(words);

                if !solver.contains(&end) {
                    eprintln!("'{}' is not in the dictionary; no ladder can end there.", end);
                    std::process::exit(1);
                }

                print_ladder(&solver.shortest_ladder(&start, &end));
            }
            "neighbors" => {
                if args.len() < 3 {
                    eprintln!("Usage: ladder-bot neighbors <word>");
                    std::process::exit(1);
                }

                let word = args[2].to_lowercase();
                let words = load_dictionary();
                let solver = LadderSolver::new(words);

                for neighbor in solver.neighbors(&word) {
                    println!("{}", neighbor);
                }
            }
            "benchmark" | "bench" => {
                if args.len() < 3 {
                    eprintln!("Usage: ladder-bot benchmark <word>");
                    std::process::exit(1);
                }

                let start = args[2].to_lowercase();
                let words = load_dictionary();
                let solver = LadderSolver::new(words);

                let spinner = Spinner::new("Running benchmark...");
                let started = std::time::Instant::now();
                let distribution = solver.ladder_length_distribution(&start);
                let average = solver.average_ladder_length(&start);
                let elapsed = started.elapsed();
                spinner.stop();

                print_distribution(&distribution);
                println!("Average ladder length: {:.3}", average);
                println!("Time: {:.2?}", elapsed);
            }
            _ => {
                eprintln!("Unknown command: {}", args[1]);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    } else {
        run_interactive();
    }
}
