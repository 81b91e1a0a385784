use std::fmt;

/// A named partition of the ISS catalog.
///
/// The catalog publishes the group list at `/iss/index` under
/// `securitygroups`; the seven groups below are the ones carrying
/// suggestible securities. The order of [`SecurityGroup::ALL`] fixes the
/// iteration order of a bulk load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityGroup {
    /// Equities
    StockShares,
    /// Bonds
    StockBonds,
    /// Foreign shares
    StockForeignShares,
    /// Eurobonds
    StockEurobond,
    /// Exchange-traded funds
    StockEtf,
    /// Mutual fund units
    StockPpif,
    /// Qualified investor instruments
    StockQnv,
}

impl SecurityGroup {
    /// All known groups, in bulk-load order.
    pub const ALL: [SecurityGroup; 7] = [
        SecurityGroup::StockShares,
        SecurityGroup::StockBonds,
        SecurityGroup::StockForeignShares,
        SecurityGroup::StockEurobond,
        SecurityGroup::StockEtf,
        SecurityGroup::StockPpif,
        SecurityGroup::StockQnv,
    ];

    /// The ISS tag used in `group_by_filter` query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StockShares => "stock_shares",
            Self::StockBonds => "stock_bonds",
            Self::StockForeignShares => "stock_foreign_shares",
            Self::StockEurobond => "stock_eurobond",
            Self::StockEtf => "stock_etf",
            Self::StockPpif => "stock_ppif",
            Self::StockQnv => "stock_qnv",
        }
    }
}

impl fmt::Display for SecurityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
