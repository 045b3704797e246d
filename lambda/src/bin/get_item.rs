use catalog_lambda::{run, Operation};

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    run(Operation::GetItem).await
}
