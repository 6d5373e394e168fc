use article_pulse::{
    server, tracing::init_tracing_subscriber, yt::embed::NoembedClient,
    yt::metadata::YtMetadataClient, yt::transcript::SubmagicClient, BlackboxClient,
    VideoPipelineBuilder,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "article-pulse", about = "YouTube video to article server")]
struct Cli {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "5000")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let pipeline = VideoPipelineBuilder::new()
        .duration_lookup(YtMetadataClient::default())
        .embed_lookup(NoembedClient::default())
        .transcript_source(SubmagicClient::default())
        .generator(BlackboxClient::default())
        .build();

    let app = server::router(pipeline);

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app).await?;

    Ok(())
}
