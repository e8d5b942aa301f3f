// Biblioteca do alerta de DPUs do Glue
// Expõe módulos para uso em testes e no binário

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

use models::JobBuckets;
use services::{render_summary, AlertNotifier, GlueApi, JobFetcher};
use utils::logging::*;

/// Resultado de uma execução completa
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub running: usize,
    pub idle: usize,
    pub failed: usize,
    pub notified: bool,
}

/// Busca, imprime o resumo e notifica se houver algum job selecionado
///
/// `notifier` é `None` quando o webhook não está configurado: a busca e o
/// resumo rodam normalmente e apenas o envio é registrado como falha.
pub async fn run<A: GlueApi>(
    fetcher: &JobFetcher<A>,
    notifier: Option<&AlertNotifier>,
) -> RunReport {
    let buckets = fetcher.fetch_or_empty().await;
    report_and_notify(&buckets, fetcher.threshold(), notifier).await
}

/// Segunda metade de `run`, usada também quando nem foi possível
/// conectar ao Glue
pub async fn report_and_notify(
    buckets: &JobBuckets,
    threshold: f64,
    notifier: Option<&AlertNotifier>,
) -> RunReport {
    println!("{}", render_summary(buckets, threshold));

    let notified = if buckets.is_empty() {
        log_nothing_to_notify();
        false
    } else if let Some(notifier) = notifier {
        notifier.notify(buckets).await.is_ok()
    } else {
        log_slack_not_configured(buckets.len());
        false
    };

    RunReport {
        running: buckets.running.len(),
        idle: buckets.idle.len(),
        failed: buckets.failed.len(),
        notified,
    }
}
