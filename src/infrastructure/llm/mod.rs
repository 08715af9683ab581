mod deepseek_client;
mod mock_comparison_client;

pub use deepseek_client::DeepSeekClient;
pub use mock_comparison_client::{FailingComparisonClient, MockComparisonClient};
