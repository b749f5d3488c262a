use std::time::Duration;

use tracing_subscriber::EnvFilter;
use ttlbuffer::prelude::*;

#[derive(Debug)]
struct Order {
    number: u32,
    item: &'static str,
}

impl Identifiable for Order {
    fn id(&self) -> String {
        format!("order-{}", self.number)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let clock = ManualClock::new();
    let buffer = BufferBuilder::new()
        .capacity(2)
        .timeout(Duration::from_secs(60))
        .clock(clock.clone())
        .build::<Order>();

    buffer.put(Order { number: 1, item: "tea" }).unwrap();
    buffer.put(Order { number: 2, item: "cake" }).unwrap();

    if let Ok(order) = buffer.get("order-1") {
        println!("hit order-1: {}", order.item);
    }

    buffer.put(Order { number: 3, item: "soup" }).unwrap();
    println!("contains order-2? {}", buffer.contains("order-2"));

    clock.advance(Duration::from_secs(45));
    buffer.touch("order-3");
    clock.advance(Duration::from_secs(30));

    println!("after 75s: {:?}", buffer.ids());
}

// Expected output:
// hit order-1: tea
// contains order-2? false
// after 75s: ["order-3"]
//
// Explanation: capacity=2; get("order-1") makes order-2 the LRU entry, so
// inserting order-3 evicts it. After 45s order-3 is touched; 30s later
// order-1 is 75s stale (reads never refresh the TTL) and is swept, while
// order-3 is only 30s past its last touch.
//
// Run with RUST_LOG=ttlbuffer=debug to see eviction and sweep events.
