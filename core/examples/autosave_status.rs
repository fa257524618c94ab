// examples/autosave_status.rs
//
// Shows the autosave coordinator's debounce and status projection against
// a mock persistence sink.

use std::sync::Arc;
use std::time::Duration;

use formwork::{form_values, Autosave, FieldValue, FunctionalSink};

#[tokio::main(flavor = "current_thread")]
async fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

  let sink = Arc::new(FunctionalSink::new(|values: formwork::FormValues| async move {
    // Stand-in for a PUT to the autosave endpoint.
    tokio::time::sleep(Duration::from_millis(40)).await;
    println!("persisted {:?}", values.get("draft"));
    Ok::<(), anyhow::Error>(())
  }));

  let autosave = Autosave::spawn(Duration::from_millis(250), sink);

  // Rapid edits collapse into a single save of the last value.
  for n in 1..=3 {
    autosave.notify(form_values([("draft", FieldValue::Int(n))]));
    println!("status after edit {}: {}", n, autosave.label());
    tokio::time::sleep(Duration::from_millis(50)).await;
  }

  tokio::time::sleep(Duration::from_millis(400)).await;
  println!("status once settled: {}", autosave.label());

  autosave.shutdown().await.expect("coordinator task panicked");
}
