use uuid::Uuid;

/// Filter and pagination options for listing scan records.
///
/// Results are always ordered newest first; the filter narrows and pages
/// them. Limits outside `1..=MAX_LIMIT` are clamped rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFilter {
    pub symbol: Option<String>,
    pub trader_id: Option<Uuid>,
    pub limit: u32,
    pub offset: u32,
}

impl ScanFilter {
    /// Page size applied when the caller does not ask for one.
    pub const DEFAULT_LIMIT: u32 = 50;

    /// Largest page size a caller can request.
    pub const MAX_LIMIT: u32 = 500;

    /// Creates an unfiltered query for the first page of scans.
    pub fn new() -> Self {
        Self {
            symbol: None,
            trader_id: None,
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }

    /// Restricts results to one symbol. Symbols are stored uppercased,
    /// so the filter value is uppercased to match.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into().trim().to_uppercase());
        self
    }

    /// Restricts results to scans recorded by one trader.
    pub fn with_trader(mut self, trader_id: Uuid) -> Self {
        self.trader_id = Some(trader_id);
        self
    }

    /// Sets the page, clamping the limit into `1..=MAX_LIMIT`.
    pub fn with_page(mut self, limit: u32, offset: u32) -> Self {
        self.limit = limit.clamp(1, Self::MAX_LIMIT);
        self.offset = offset;
        self
    }
}

impl Default for ScanFilter {
    fn default() -> Self {
        Self::new()
    }
}
