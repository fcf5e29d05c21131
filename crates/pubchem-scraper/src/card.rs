//! Result-card resolution and substance-to-compound redirection.
//!
//! A search page may present its best match in several layouts, so the card
//! is looked up through a three-tier selector chain. When the card describes a
//! deposited substance rather than a compound, the compound page is fetched
//! once by CID and its card text is used instead.

use crate::error::Result;
use crate::extract::ExtractionRules;
use crate::resolver::{find_element, WaitPolicy};
use crate::url_builder::build_url;
use pubchem_browser::NavigableSession;
use pubchem_core::{SelectorChain, SelectorTier};
use tracing::{debug, info, warn};

/// Literal marking a card that describes a substance record.
pub const SUBSTANCE_MARKER: &str = "Substance SID";

/// A resolved result card. Lives for a single page visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    /// Which selector of the chain matched
    pub tier: SelectorTier,
    /// Visible text of the card
    pub text: String,
}

impl ResultCard {
    /// Whether the card describes a substance record.
    pub fn is_substance(&self) -> bool {
        self.text.contains(SUBSTANCE_MARKER)
    }
}

/// Locates result cards on search pages of one target.
#[derive(Debug, Clone)]
pub struct CardResolver {
    base_url: String,
    chain: SelectorChain,
    policy: WaitPolicy,
}

impl CardResolver {
    pub fn new(base_url: impl Into<String>, chain: SelectorChain, policy: WaitPolicy) -> Self {
        Self {
            base_url: base_url.into(),
            chain,
            policy,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Find the card on the current page, trying main, fallback and
    /// alternate-fallback selectors in that order.
    ///
    /// Stops at the first selector that yields an element.
    pub async fn resolve_card(
        &self,
        session: &mut dyn NavigableSession,
    ) -> Result<Option<ResultCard>> {
        for (tier, selector) in self.chain.tiers() {
            if let Some(text) =
                find_element(session, selector, &self.policy, Some(tier.label())).await?
            {
                debug!(tier = %tier, "result card resolved");
                return Ok(Some(ResultCard { tier, text }));
            }
        }

        warn!("no selector in the chain matched a result card");
        Ok(None)
    }

    /// Produce the text to extract fields from.
    ///
    /// An absent card yields empty text. A substance card that carries a CID
    /// triggers exactly one navigation to the compound page built from that
    /// CID; the compound card's text is returned when it is non-empty, the
    /// original card's text otherwise.
    ///
    /// The redirect is single-hop: the compound page is never checked for the
    /// substance marker, so a chain of substance pages cannot loop.
    pub async fn resolve_text(
        &self,
        card: Option<ResultCard>,
        session: &mut dyn NavigableSession,
        rules: &ExtractionRules,
    ) -> Result<String> {
        let Some(card) = card else {
            return Ok(String::new());
        };

        if !card.is_substance() {
            return Ok(card.text);
        }

        let cid = rules.cid(&card.text);
        if cid.is_empty() {
            debug!("substance card without a compound CID, keeping original text");
            return Ok(card.text);
        }

        let url = build_url(&self.base_url, &cid);
        info!(%cid, %url, "substance card found, following compound CID");
        session.open(&url).await?;

        match self.resolve_card(session).await? {
            Some(compound) if !compound.text.is_empty() => Ok(compound.text),
            _ => {
                warn!(%cid, "compound page yielded no card text, keeping substance card");
                Ok(card.text)
            }
        }
    }
}
