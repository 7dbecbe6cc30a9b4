//! Walks through the deques, the algorithms and the priority queue.
//!
//! Run with `cargo run --example walkthrough`. Set `RUST_LOG_LEVEL=trace` to
//! see the growth and cut-or-append decisions.

use deque_collections::{
    BigPriorityQueue, CircularDeque, Deque, LinkedDeque, NaiveDeque, algorithms,
};
use log::{LevelFilter, info};
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};
use std::error::Error;

fn initialise_logging(level_filter: LevelFilter) -> Result<(), Box<dyn Error>> {
    CombinedLogger::init(vec![TermLogger::new(
        level_filter,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;

    info!("Logging initialised successfully");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let level = std::env::var("RUST_LOG_LEVEL")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LevelFilter::Info);
    initialise_logging(level)?;

    // Deque
    let mut d: CircularDeque<i32> = CircularDeque::new();
    d.insert_back(10);
    d.insert_back(20);
    d.insert_front(5);
    d.insert_back(30);

    println!("Deque = {d}");
    println!("to_vec = {:?}", d.to_vec());
    println!("remove_front = {}", d.remove_front()?);
    println!("remove_back  = {}", d.remove_back()?);
    println!("Deque = {d}");

    // Algorithms
    algorithms::reverse(&mut d);
    println!("reverse => {d}");

    let any_even = algorithms::any_match(&mut d, |x| x % 2 == 0);
    println!("any_match even => {any_even}");
    println!("Deque (restored) => {d}");
    println!("min => {}", algorithms::min(&mut d)?);

    // Priority queue
    let mut bpq: BigPriorityQueue<i32> = BigPriorityQueue::new();
    for x in [10, 20, 5, 7, 1] {
        bpq.offer(x)?;
    }
    println!("BPQ = {bpq}");
    if let Some(front) = bpq.peek() {
        println!("peek = {front}");
    }
    if let Some(front) = bpq.poll() {
        println!("poll = {front}");
    }
    println!("BPQ after poll = {bpq}");

    // Cost profiles
    let n = 1000;
    let mut circular: CircularDeque<i32> = CircularDeque::with_capacity(n);
    let mut naive: NaiveDeque<i32> = NaiveDeque::with_capacity(n);
    let mut linked: LinkedDeque<i32> = LinkedDeque::new();
    for i in 0..n as i32 {
        circular.insert_front(i);
        naive.insert_front(i);
        linked.insert_front(i);
    }
    info!(
        "{} front inserts: circular ops = {}, naive ops = {}, linked ops = {}",
        n,
        circular.ops(),
        naive.ops(),
        linked.ops()
    );

    Ok(())
}
