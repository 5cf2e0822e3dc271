//! Concurrent enrichment of generated permutations.
//!
//! A [`Pool`] drains a [`JobQueue`] of permutations across a bounded set of
//! worker tasks; each worker runs the same fixed probe sequence per
//! candidate — DNS, MX relay, WHOIS, GeoIP, HTTP/SMTP banners, fuzzy-hash
//! content comparison — and streams a [`CandidateRecord`] back over an mpsc
//! channel as soon as it's done. A failed or disabled probe simply leaves
//! its field `None`; one candidate's bad luck never blocks another's.

use std::fmt;
use std::net::IpAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::time::timeout;
use tracing::{debug, warn};

#[cfg(feature = "smtp_lookup")]
use async_smtp::{ClientSecurity, Envelope, SendableEmail, ServerAddress, SmtpClient};
#[cfg(feature = "smtp_lookup")]
use rand::Rng;

#[cfg(feature = "whois_lookup")]
use whois_rust::WhoIsLookupOptions;

#[cfg(feature = "geoip_lookup")]
use maxminddb::geoip2;

#[cfg(feature = "ssdeep_lookup")]
use crate::config::FETCH_TIMEOUT;
#[cfg(feature = "ssdeep_lookup")]
use crate::fuzzyhash;

#[cfg(feature = "smtp_lookup")]
use crate::config::SMTP_TIMEOUT;

use crate::config::{
    Capabilities, EnrichmentConfig, BANNER_TIMEOUT, DNS_LIFETIME_TIMEOUT, DNS_QUERY_TIMEOUT,
};
use crate::permutate::Permutation;
use crate::queue::JobQueue;

/// DNS answer placeholder recorded when every configured nameserver failed
/// to answer (as opposed to a confirmed `NXDOMAIN`), so a caller can tell
/// "the name doesn't exist" apart from "the infrastructure didn't answer".
pub const SERVFAIL_SENTINEL: &str = "!ServFail";

/// Temporary type-alias over `EnrichmentError`, kept for callers that want
/// to propagate a probe-construction failure rather than have it absorbed.
pub type Result<T> = std::result::Result<T, EnrichmentError>;

#[derive(Copy, Clone, Debug)]
pub struct EnrichmentError;

impl fmt::Display for EnrichmentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "enrichment probe failed")
    }
}

impl std::error::Error for EnrichmentError {}

/// Everything learned about a single generated candidate. One record is
/// produced per permutation; fields beyond `fuzzer`/`domain_unicode` are
/// `None` when their probe was disabled, skipped, or failed. Enrichment
/// never clears a field set by an earlier probe.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CandidateRecord {
    pub fuzzer: String,
    pub domain_unicode: String,
    pub domain_ascii: Option<String>,

    /// Sorted IPv4 addresses, or `[SERVFAIL_SENTINEL]` when every
    /// nameserver failed to answer.
    pub dns_a: Option<Vec<String>>,
    pub dns_aaaa: Option<Vec<String>>,
    pub dns_ns: Option<Vec<String>>,
    pub dns_mx: Option<Vec<String>>,
    pub nxdomain: bool,

    pub geoip_country: Option<String>,
    pub whois_created: Option<String>,
    pub whois_updated: Option<String>,
    pub banner_http: Option<String>,
    pub banner_smtp: Option<String>,

    /// `Some(true)` when the candidate's MX accepted mail for a randomized,
    /// almost-certainly-nonexistent mailbox — a catch-all or open relay,
    /// either of which makes the candidate a viable phishing drop box.
    pub mx_spy: Option<bool>,

    /// Fuzzy-hash similarity (0-100) between the candidate's served content
    /// and the reference content the caller supplied to the pool.
    pub ssdeep_score: Option<u8>,
}

/// A bounded pool of worker tasks draining a shared [`JobQueue`].
///
/// Per the documented concurrency model, the pool silently forces
/// `threads` down to 1 whenever the WHOIS capability is present, since
/// typical WHOIS clients are not safely reentrant across tasks.
pub struct Pool {
    config: EnrichmentConfig,
    capabilities: Arc<Capabilities>,
}

impl Pool {
    pub fn new(mut config: EnrichmentConfig, capabilities: Capabilities) -> Self {
        if config.enable_whois && config.threads > 1 {
            warn!(threads = config.threads, "forcing threads=1: whois capability is not reentrant");
            config.threads = 1;
        }

        Self {
            config,
            capabilities: Arc::new(capabilities),
        }
    }

    /// Enrich every permutation in `jobs`, streaming a [`CandidateRecord`]
    /// per candidate to `tx` as soon as its probe sequence completes.
    ///
    /// `original_ascii` is the IDNA ASCII form of the domain the
    /// permutations were generated from — used as the sender address for
    /// the MX relay probe and to never spy-probe the original domain
    /// against itself. `reference_content`, when supplied, is the
    /// original's fetched page body the fuzzy-hash probe compares against.
    /// `cancel`, when supplied, lets a host signal early shutdown: workers
    /// finish their in-flight candidate, then stop pulling new jobs.
    pub async fn run(
        &self,
        original_ascii: Arc<str>,
        jobs: Vec<Permutation>,
        reference_content: Option<Arc<Vec<u8>>>,
        cancel: Option<Arc<AtomicBool>>,
        tx: mpsc::Sender<CandidateRecord>,
    ) {
        let queue = JobQueue::new(jobs);
        let total = queue.len();
        debug!(total, threads = self.config.threads, "starting enrichment pool");

        let mut handles = Vec::with_capacity(self.config.threads.max(1));
        for worker_id in 0..self.config.threads.max(1) {
            let queue = queue.clone();
            let tx = tx.clone();
            let config = self.config.clone();
            let capabilities = Arc::clone(&self.capabilities);
            let reference_content = reference_content.clone();
            let cancel = cancel.clone();
            let original_ascii = Arc::clone(&original_ascii);

            handles.push(tokio::spawn(async move {
                loop {
                    if cancel.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                        debug!(worker_id, "cancellation observed, worker exiting");
                        break;
                    }

                    let Some(job) = queue.pop().await else {
                        break;
                    };

                    let reference = reference_content.as_deref().map(Vec::as_slice);
                    let record =
                        enrich_one(&job, &original_ascii, &config, &capabilities, reference).await;

                    if tx.send(record).await.is_err() {
                        debug!(worker_id, "receiver dropped, worker exiting early");
                        break;
                    }
                }
            }));
        }

        drop(tx);

        for handle in handles {
            let _ = handle.await;
        }
    }
}

async fn enrich_one(
    job: &Permutation,
    original_ascii: &str,
    config: &EnrichmentConfig,
    capabilities: &Capabilities,
    reference_content: Option<&[u8]>,
) -> CandidateRecord {
    let mut record = CandidateRecord {
        fuzzer: format!("{:?}", job.kind),
        domain_unicode: job.domain.fqdn.clone(),
        ..Default::default()
    };

    record.domain_ascii = job.domain.to_ascii().ok();
    let query_name = record
        .domain_ascii
        .clone()
        .unwrap_or_else(|| job.domain.fqdn.clone());

    if let Some(resolver) = &capabilities.resolver {
        resolve_with_resolver(resolver, &query_name, config, &mut record).await;
    } else {
        resolve_with_system_resolver(&query_name, &mut record).await;
    }

    if record.nxdomain {
        return record;
    }

    let ns_succeeded = matches!(
        &record.dns_ns,
        Some(ns) if ns.first().map(String::as_str) != Some(SERVFAIL_SENTINEL)
    );

    let mx_host = record
        .dns_mx
        .as_ref()
        .and_then(|mx| mx.first())
        .filter(|mx| mx.as_str() != SERVFAIL_SENTINEL);

    if config.enable_mx_check {
        if let Some(mx_host) = mx_host {
            record.mx_spy = mx_spy_check(mx_host, original_ascii, &query_name).await;
        }
    }

    #[cfg(feature = "whois_lookup")]
    if config.enable_whois && ns_succeeded {
        if let Some(whois) = &capabilities.whois {
            whois_dates(whois, &query_name, &mut record);
        }
    }
    #[cfg(not(feature = "whois_lookup"))]
    let _ = ns_succeeded;

    let first_ip: Option<IpAddr> = record
        .dns_a
        .as_ref()
        .or(record.dns_aaaa.as_ref())
        .and_then(|addrs| addrs.first())
        .filter(|addr| addr.as_str() != SERVFAIL_SENTINEL)
        .and_then(|addr| addr.parse().ok());

    #[cfg(feature = "geoip_lookup")]
    if config.enable_geoip {
        if let (Some(geoip), Some(ip)) = (&capabilities.geoip, first_ip) {
            record.geoip_country = geoip_country(geoip, ip);
        }
    }

    if config.enable_banners {
        if let Some(ip) = first_ip {
            record.banner_http = http_banner(ip, &query_name, &config.user_agent).await;
        }
        if let Some(mx_host) = mx_host {
            record.banner_smtp = smtp_banner(mx_host).await;
        }
    }

    #[cfg(feature = "ssdeep_lookup")]
    if config.enable_ssdeep && first_ip.is_some() {
        if let Some(reference) = reference_content {
            record.ssdeep_score =
                fetch_and_compare(&query_name, config, capabilities, reference).await;
        }
    }
    #[cfg(not(feature = "ssdeep_lookup"))]
    let _ = reference_content;

    record
}

fn normalize_sorted(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = values
        .map(|value| value.trim_end_matches('.').to_string())
        .collect();
    out.sort();
    out
}

/// Resolves NS, then A/AAAA, then (when enabled and NS succeeded) MX, over
/// `name`. A confirmed `NXDomain` response short-circuits the rest; a
/// `ServFail`-shaped "every nameserver failed" response records the
/// sentinel and continues; any other resolver error (timeout, no records)
/// is a soft failure that simply leaves the field unset.
async fn resolve_with_resolver(
    resolver: &hickory_resolver::TokioAsyncResolver,
    name: &str,
    config: &EnrichmentConfig,
    record: &mut CandidateRecord,
) {
    let lifetime = timeout(DNS_LIFETIME_TIMEOUT, async {
        match timeout(DNS_QUERY_TIMEOUT, resolver.ns_lookup(name)).await {
            Ok(Ok(ns)) => {
                record.dns_ns = Some(normalize_sorted(ns.iter().map(ToString::to_string)));
            }
            Ok(Err(error)) => apply_dns_error(&mut record.dns_ns, &mut record.nxdomain, &error),
            Err(_) => debug!(name, "ns lookup timed out"),
        }

        if record.nxdomain {
            return;
        }

        match timeout(DNS_QUERY_TIMEOUT, resolver.ipv4_lookup(name)).await {
            Ok(Ok(a)) => {
                record.dns_a = Some(normalize_sorted(a.iter().map(ToString::to_string)));
            }
            Ok(Err(error)) => apply_dns_error(&mut record.dns_a, &mut record.nxdomain, &error),
            Err(_) => debug!(name, "a lookup timed out"),
        }

        if record.nxdomain {
            return;
        }

        match timeout(DNS_QUERY_TIMEOUT, resolver.ipv6_lookup(name)).await {
            Ok(Ok(aaaa)) => {
                record.dns_aaaa = Some(normalize_sorted(aaaa.iter().map(ToString::to_string)));
            }
            Ok(Err(error)) => apply_dns_error(&mut record.dns_aaaa, &mut record.nxdomain, &error),
            Err(_) => debug!(name, "aaaa lookup timed out"),
        }

        if record.nxdomain {
            return;
        }

        let ns_succeeded = matches!(
            &record.dns_ns,
            Some(ns) if ns.first().map(String::as_str) != Some(SERVFAIL_SENTINEL)
        );

        if config.enable_mx_check && ns_succeeded {
            match timeout(DNS_QUERY_TIMEOUT, resolver.mx_lookup(name)).await {
                Ok(Ok(mx)) => {
                    record.dns_mx = Some(normalize_sorted(
                        mx.iter().map(|m| m.exchange().to_string()),
                    ));
                }
                Ok(Err(error)) => apply_dns_error(&mut record.dns_mx, &mut record.nxdomain, &error),
                Err(_) => debug!(name, "mx lookup timed out"),
            }
        }
    })
    .await;

    if lifetime.is_err() {
        debug!(name, "dns lifetime budget exhausted");
    }
}

fn apply_dns_error(
    field: &mut Option<Vec<String>>,
    nxdomain: &mut bool,
    error: &hickory_resolver::error::ResolveError,
) {
    use hickory_resolver::error::ResolveErrorKind;
    use hickory_resolver::proto::op::ResponseCode;

    if let ResolveErrorKind::NoRecordsFound { response_code, .. } = error.kind() {
        match *response_code {
            ResponseCode::NXDomain => *nxdomain = true,
            ResponseCode::ServFail => *field = Some(vec![SERVFAIL_SENTINEL.to_string()]),
            _ => {}
        }
    }
}

/// Fallback DNS path when no full resolver capability was supplied: plain
/// A/AAAA resolution via the system resolver, with no NS/MX visibility.
async fn resolve_with_system_resolver(name: &str, record: &mut CandidateRecord) {
    let lookup = timeout(DNS_LIFETIME_TIMEOUT, tokio::net::lookup_host(format!("{name}:0"))).await;

    let Ok(Ok(addrs)) = lookup else {
        return;
    };

    let mut v4 = Vec::new();
    let mut v6 = Vec::new();
    for addr in addrs {
        match addr.ip() {
            IpAddr::V4(ip) => v4.push(ip.to_string()),
            IpAddr::V6(ip) => v6.push(ip.to_string()),
        }
    }

    if v4.is_empty() && v6.is_empty() {
        record.nxdomain = true;
        return;
    }

    if !v4.is_empty() {
        v4.sort();
        record.dns_a = Some(v4);
    }
    if !v6.is_empty() {
        v6.sort();
        record.dns_aaaa = Some(v6);
    }
}

/// Sends `MAIL FROM`/`RCPT TO`/`DATA`/`QUIT` against a randomized,
/// almost-certainly-unused mailbox at the candidate's MX, and reports
/// whether the whole sequence was accepted — a catch-all or open relay
/// either way. Never probes the candidate against itself.
#[cfg(feature = "smtp_lookup")]
async fn mx_spy_check(mx_host: &str, original_ascii: &str, candidate_ascii: &str) -> Option<bool> {
    if candidate_ascii == original_ascii {
        return None;
    }

    let probe_id: u32 = rand::thread_rng().gen();
    let from = format!("randombob{probe_id:08x}@{original_ascii}");
    let to = format!("randomalice{probe_id:08x}@{candidate_ascii}");

    let email = SendableEmail::new(
        Envelope::new(Some(from.parse().ok()?), vec![to.parse().ok()?]).ok()?,
        "lookalike",
        "mx relay probe\n",
    );

    let smtp = SmtpClient::with_security(
        ServerAddress {
            host: mx_host.trim_end_matches('.').to_string(),
            port: 25,
        },
        ClientSecurity::None,
    );

    match timeout(SMTP_TIMEOUT, smtp.into_transport().connect_and_send(email)).await {
        Ok(Ok(response)) if response.is_positive() => Some(true),
        _ => None,
    }
}

#[cfg(not(feature = "smtp_lookup"))]
#[allow(clippy::unused_async)]
async fn mx_spy_check(_mx_host: &str, _original_ascii: &str, _candidate_ascii: &str) -> Option<bool> {
    None
}

/// Extracts `created`/`updated` dates from a raw WHOIS response. Registrar
/// formats vary wildly, so this scans for the first `YYYY-MM-DD`-shaped
/// token following a `creat`/`regist` or `updat`/`changed` line, rather
/// than trying to parse any one registrar's exact field layout.
#[cfg(feature = "whois_lookup")]
fn whois_dates(whois: &whois_rust::WhoIs, name: &str, record: &mut CandidateRecord) {
    let lookup_options = match WhoIsLookupOptions::from_string(name) {
        Ok(mut options) => {
            options.timeout = Some(std::time::Duration::from_secs(5));
            options.follow = 1;
            options
        }
        Err(error) => {
            debug!(name, %error, "whois lookup options rejected");
            return;
        }
    };

    let raw = match whois.lookup(lookup_options) {
        Ok(raw) => raw,
        Err(error) => {
            debug!(name, %error, "whois lookup failed");
            return;
        }
    };

    for line in raw.lines() {
        let lowercase = line.to_lowercase();
        if let Some(date) = extract_iso_date(line) {
            if lowercase.contains("creat") || lowercase.contains("regist") {
                record.whois_created.get_or_insert(date.clone());
            }
            if lowercase.contains("updat") || lowercase.contains("changed") {
                record.whois_updated.get_or_insert(date);
            }
        }
    }
}

fn extract_iso_date(line: &str) -> Option<String> {
    for start in 0..line.len().saturating_sub(9) {
        let Some(candidate) = line.get(start..start + 10) else {
            continue;
        };
        let bytes = candidate.as_bytes();
        let is_iso_date = candidate.len() == 10
            && bytes[0..4].iter().all(u8::is_ascii_digit)
            && bytes[4] == b'-'
            && bytes[5..7].iter().all(u8::is_ascii_digit)
            && bytes[7] == b'-'
            && bytes[8..10].iter().all(u8::is_ascii_digit);

        if is_iso_date {
            return Some(candidate.to_string());
        }
    }
    None
}

/// Reduces a GeoIP City lookup down to the country's English name, the one
/// field the candidate record tracks.
#[cfg(feature = "geoip_lookup")]
fn geoip_country(geoip: &maxminddb::Reader<Vec<u8>>, ip: IpAddr) -> Option<String> {
    let city: geoip2::City = geoip.lookup(ip).ok()?;
    let name = city.country?.names?.get("en").copied()?;
    let trimmed = name.split(',').next().unwrap_or(name).trim();

    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Opens a raw TCP connection to `ip:80`, issues a `HEAD /` request and
/// extracts a `Server:` header value from the response; falls back to
/// `HTTP <status-token>` from the response line when no such header is
/// present.
async fn http_banner(ip: IpAddr, host: &str, user_agent: &str) -> Option<String> {
    let request = format!("HEAD / HTTP/1.1\r\nHost: {host}\r\nUser-agent: {user_agent}\r\n\r\n");

    let response = timeout(BANNER_TIMEOUT, async {
        let mut stream = TcpStream::connect((ip, 80)).await.ok()?;
        stream.write_all(request.as_bytes()).await.ok()?;

        let mut buffer = vec![0u8; 1024];
        let read = stream.read(&mut buffer).await.ok()?;
        buffer.truncate(read);
        Some(String::from_utf8_lossy(&buffer).into_owned())
    })
    .await
    .ok()??;

    let server_header = response
        .lines()
        .find(|line| line.to_lowercase().starts_with("server:"))
        .and_then(|line| line.splitn(2, ':').nth(1))
        .map(|value| value.trim().to_string());

    server_header.or_else(|| {
        let status_token = response.lines().next()?.split_whitespace().nth(1)?;
        Some(format!("HTTP {status_token}"))
    })
}

/// Opens a raw TCP connection to `ip:25` and captures the unsolicited
/// greeting banner: everything after the `220` code when present, else the
/// first 40 characters of whatever the server sent.
async fn smtp_banner(mx_host: &str) -> Option<String> {
    let banner = timeout(BANNER_TIMEOUT, async {
        let mut stream = TcpStream::connect((mx_host, 25)).await.ok()?;
        let mut buffer = vec![0u8; 1024];
        let read = stream.read(&mut buffer).await.ok()?;
        buffer.truncate(read);
        Some(String::from_utf8_lossy(&buffer).into_owned())
    })
    .await
    .ok()??;

    let first_line = banner.lines().next()?;

    if first_line.starts_with("220") {
        Some(first_line.get(4..).unwrap_or("").trim().to_string())
    } else {
        Some(first_line.chars().take(40).collect())
    }
}

/// Fetches the candidate's served content over HTTP and scores its
/// similarity against `reference` with the fuzzy-hash comparison.
#[cfg(feature = "ssdeep_lookup")]
async fn fetch_and_compare(
    name: &str,
    config: &EnrichmentConfig,
    capabilities: &Capabilities,
    reference: &[u8],
) -> Option<u8> {
    let owned_client;
    let client: &reqwest::Client = if let Some(client) = &capabilities.http_client {
        client
    } else {
        owned_client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .danger_accept_invalid_certs(true)
            .timeout(FETCH_TIMEOUT)
            .build()
            .ok()?;
        &owned_client
    };

    let response = client.get(format!("http://{name}")).send().await.ok()?;
    if !response.status().is_success() {
        return None;
    }

    let body = response.bytes().await.ok()?;

    let candidate_hash = fuzzyhash::hash(&body);
    let reference_hash = fuzzyhash::hash(reference);

    Some(fuzzyhash::compare(&candidate_hash, &reference_hash))
}

/// Periodically publishes queue-drain progress. A purely informational
/// primitive; rendering it is a host concern.
pub mod progress {
    use std::time::Duration;

    use tokio::sync::watch;
    use tokio::time::interval;

    use crate::queue::JobQueue;

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Progress {
        pub completed: usize,
        pub total: usize,
        pub percent: u8,
    }

    /// Spawns a task that polls `queue.len()` once a second and publishes
    /// a [`Progress`] snapshot until the queue drains.
    pub fn report(queue: &JobQueue, total: usize) -> watch::Receiver<Progress> {
        let (tx, rx) = watch::channel(Progress { completed: 0, total, percent: 0 });
        let queue = queue.clone();

        tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(1));

            loop {
                ticker.tick().await;

                let remaining = queue.len();
                let completed = total.saturating_sub(remaining);
                let percent = if total == 0 {
                    100
                } else {
                    u8::try_from((completed * 100 / total).min(100)).unwrap_or(100)
                };

                if tx.send(Progress { completed, total, percent }).is_err() || remaining == 0 {
                    break;
                }
            }
        });

        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_iso_date_finds_embedded_token() {
        assert_eq!(
            extract_iso_date("Creation Date: 1997-09-15T04:00:00Z"),
            Some("1997-09-15".to_string())
        );
    }

    #[test]
    fn test_extract_iso_date_absent() {
        assert_eq!(extract_iso_date("Registrar: Example Registrar, LLC"), None);
    }

    #[test]
    fn test_normalize_sorted_strips_trailing_dots_and_sorts() {
        let input = vec!["ns2.example.com.".to_string(), "ns1.example.com".to_string()];
        assert_eq!(
            normalize_sorted(input.into_iter()),
            vec!["ns1.example.com".to_string(), "ns2.example.com".to_string()]
        );
    }

    #[tokio::test]
    async fn test_pool_streams_empty_queue_without_hanging() {
        let pool = Pool::new(EnrichmentConfig::default(), Capabilities::default());
        let (tx, mut rx) = mpsc::channel(10);

        pool.run(Arc::from("example.com"), Vec::new(), None, None, tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_pool_emits_one_record_per_job_with_no_resolver_capability() {
        use crate::filter::Permissive;
        use crate::permutate::Domain;

        let domain = Domain::new("example.invalid").unwrap();
        let jobs: Vec<_> = domain.addition(&Permissive).take(3).collect();
        let expected = jobs.len();

        let pool = Pool::new(EnrichmentConfig::default(), Capabilities::default());
        let (tx, mut rx) = mpsc::channel(10);

        pool.run(Arc::from("example.invalid"), jobs, None, None, tx).await;

        let mut received = 0;
        while let Some(_record) = rx.recv().await {
            received += 1;
        }

        assert_eq!(received, expected);
    }

    #[tokio::test]
    async fn test_cancellation_stops_worker_before_draining_queue() {
        use crate::filter::Permissive;
        use crate::permutate::Domain;

        let domain = Domain::new("example.invalid").unwrap();
        let jobs: Vec<_> = domain.addition(&Permissive).collect();

        let mut config = EnrichmentConfig::default();
        config.threads = 1;
        let pool = Pool::new(config, Capabilities::default());
        let (tx, mut rx) = mpsc::channel(jobs.len());

        let cancel = Arc::new(AtomicBool::new(true));
        pool.run(Arc::from("example.invalid"), jobs, None, Some(cancel), tx)
            .await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_whois_forces_single_thread() {
        let mut config = EnrichmentConfig::default();
        config.threads = 8;
        config.enable_whois = true;

        let pool = Pool::new(config, Capabilities::default());
        assert_eq!(pool.config.threads, 1);
    }

    #[tokio::test]
    async fn test_progress_reports_completion_for_drained_queue() {
        use crate::filter::Permissive;
        use crate::permutate::Domain;
        use progress::report;

        let domain = Domain::new("example.com").unwrap();
        let jobs: Vec<_> = domain.addition(&Permissive).take(2).collect();
        let total = jobs.len();

        let queue = JobQueue::new(jobs);
        let mut rx = report(&queue, total);

        while queue.pop().await.is_some() {}

        tokio::time::timeout(std::time::Duration::from_secs(3), rx.changed())
            .await
            .expect("progress reporter did not report within timeout")
            .unwrap();

        assert_eq!(rx.borrow().completed, total);
    }
}
