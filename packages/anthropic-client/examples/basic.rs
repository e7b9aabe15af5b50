//! Basic Anthropic client usage example

use anthropic_client::{AnthropicClient, Message, MessageRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize from environment
    let client = AnthropicClient::from_env()?;

    // Simple message
    println!("=== Create Message ===");
    let response = client
        .create_message(
            MessageRequest::new("claude-3-opus-20240229")
                .system("You are a helpful assistant.")
                .message(Message::user("What is Rust in one sentence?"))
                .temperature(0.7)
                .max_tokens(200),
        )
        .await?;

    println!("Response: {}", response.content);

    if let Some(usage) = response.usage {
        println!(
            "Tokens: {} in, {} out",
            usage.input_tokens, usage.output_tokens
        );
    }

    Ok(())
}
