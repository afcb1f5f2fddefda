// ── Content service ──
//
// The typed handoff between the fetch/validate pipeline and consumers
// (route handlers). Request-scoped and stateless: every call performs
// its own CMS round-trip; nothing is cached or mutated locally.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use vitrine_api::ContentClient;

use crate::error::CoreError;
use crate::model::{
    Accordion, Banner, EntryId, Event, Footer, Header, Modal, Social, Testimonial,
};

/// Configured entry ids for the page shell singletons.
#[derive(Debug, Clone)]
pub struct ShellDefaults {
    pub header_id: EntryId,
    pub footer_id: EntryId,
}

/// The assembled page shell: header and footer, both required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageShell {
    pub header: Header,
    pub footer: Footer,
}

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc`. Wraps the shared [`ContentClient`] and
/// converts every DTO into its canonical domain type on the way out.
#[derive(Clone)]
pub struct ContentService {
    inner: Arc<ServiceInner>,
}

struct ServiceInner {
    client: ContentClient,
    shell: ShellDefaults,
}

impl ContentService {
    pub fn new(client: ContentClient, shell: ShellDefaults) -> Self {
        Self {
            inner: Arc::new(ServiceInner { client, shell }),
        }
    }

    /// The configured shell entry ids.
    pub fn shell_defaults(&self) -> &ShellDefaults {
        &self.inner.shell
    }

    // ── Single-entry fetches ─────────────────────────────────────────

    pub async fn banner(&self, id: &EntryId, preview: bool) -> Result<Banner, CoreError> {
        Ok(self
            .inner
            .client
            .banner_by_id(id.as_str(), preview)
            .await?
            .into())
    }

    pub async fn accordion(&self, id: &EntryId, preview: bool) -> Result<Accordion, CoreError> {
        Ok(self
            .inner
            .client
            .accordion_by_id(id.as_str(), preview)
            .await?
            .into())
    }

    pub async fn event(&self, id: &EntryId, preview: bool) -> Result<Event, CoreError> {
        Ok(self
            .inner
            .client
            .event_by_id(id.as_str(), preview)
            .await?
            .into())
    }

    pub async fn modal(&self, id: &EntryId, preview: bool) -> Result<Modal, CoreError> {
        Ok(self
            .inner
            .client
            .modal_by_id(id.as_str(), preview)
            .await?
            .into())
    }

    pub async fn social(&self, id: &EntryId, preview: bool) -> Result<Social, CoreError> {
        Ok(self
            .inner
            .client
            .social_by_id(id.as_str(), preview)
            .await?
            .into())
    }

    pub async fn testimonial(
        &self,
        id: &EntryId,
        preview: bool,
    ) -> Result<Testimonial, CoreError> {
        Ok(self
            .inner
            .client
            .testimonial_by_id(id.as_str(), preview)
            .await?
            .into())
    }

    pub async fn header(&self, id: &EntryId, preview: bool) -> Result<Header, CoreError> {
        Ok(self
            .inner
            .client
            .header_by_id(id.as_str(), preview)
            .await?
            .into())
    }

    pub async fn footer(&self, id: &EntryId, preview: bool) -> Result<Footer, CoreError> {
        Ok(self
            .inner
            .client
            .footer_by_id(id.as_str(), preview)
            .await?
            .into())
    }

    // ── Collection fetches ───────────────────────────────────────────

    pub async fn banners(&self, preview: bool) -> Result<Vec<Banner>, CoreError> {
        let items = self.inner.client.banners_all(preview).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn accordions(&self, preview: bool) -> Result<Vec<Accordion>, CoreError> {
        let items = self.inner.client.accordions_all(preview).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn events(&self, preview: bool) -> Result<Vec<Event>, CoreError> {
        let items = self.inner.client.events_all(preview).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn modals(&self, preview: bool) -> Result<Vec<Modal>, CoreError> {
        let items = self.inner.client.modals_all(preview).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn socials(&self, preview: bool) -> Result<Vec<Social>, CoreError> {
        let items = self.inner.client.socials_all(preview).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn testimonials(&self, preview: bool) -> Result<Vec<Testimonial>, CoreError> {
        let items = self.inner.client.testimonials_all(preview).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    // ── Shell assembly ───────────────────────────────────────────────

    /// Fetch the configured header and footer concurrently.
    ///
    /// Both are required: if either fetch fails, the whole shell fails.
    /// Ordering between the two requests is irrelevant.
    pub async fn shell(&self, preview: bool) -> Result<PageShell, CoreError> {
        let shell = &self.inner.shell;
        debug!(
            header_id = %shell.header_id,
            footer_id = %shell.footer_id,
            preview,
            "assembling page shell"
        );

        let (header, footer) = tokio::try_join!(
            self.inner.client.header_by_id(shell.header_id.as_str(), preview),
            self.inner.client.footer_by_id(shell.footer_id.as_str(), preview),
        )?;

        Ok(PageShell {
            header: header.into(),
            footer: footer.into(),
        })
    }
}
