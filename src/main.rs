use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use docent::application::ports::PdfTextReader;
use docent::application::services::{ChatOrchestrator, ConversationService};
use docent::infrastructure::llm::create_llm_client;
use docent::infrastructure::observability::{TracingConfig, init_tracing};
use docent::infrastructure::scheduling::TokioSleeper;
use docent::infrastructure::text_processing::{ExtractorFactory, OxidePdfReader, WordChunker};
use docent::presentation::{AppState, Environment, SessionStore, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(&TracingConfig::from_settings(
        environment,
        &settings.logging,
    ));

    let llm_client = Arc::new(create_llm_client(&settings.llm)?);
    let ocr = ExtractorFactory::create_ocr(&settings.extraction)?;
    let pdf_reader: Arc<dyn PdfTextReader> = Arc::new(OxidePdfReader::new());
    let extractor = ExtractorFactory::create(&settings.extraction, ocr, Arc::clone(&pdf_reader))?;

    let orchestrator = ChatOrchestrator::new(
        llm_client,
        Arc::new(TokioSleeper),
        settings.retry.policy(),
        settings.llm.completion_settings(),
    );

    let conversation_service = Arc::new(ConversationService::new(
        extractor,
        pdf_reader,
        Arc::new(WordChunker::new(settings.chunking.max_chunk_length)),
        orchestrator,
        settings.extraction.page_range_threshold,
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        conversation_service,
        sessions: SessionStore::new(),
        settings,
    };

    let router = create_router(state);

    tracing::info!(%addr, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
