//! Tool definitions module.
//!
//! One file per endpoint family of the remote API. Each family exports a
//! `TOOLS` table; [`FAMILIES`] fixes the order tools are advertised in.

mod credit;
mod crypto;
mod economy;
mod etf;
mod forex;
mod indices;
mod news;
mod stocks;

use super::catalog::ToolDefinition;

/// Every endpoint family, in catalog order.
pub static FAMILIES: &[&[ToolDefinition]] = &[
    stocks::TOOLS,
    etf::TOOLS,
    crypto::TOOLS,
    indices::TOOLS,
    forex::TOOLS,
    economy::TOOLS,
    news::TOOLS,
    credit::TOOLS,
];

pub(crate) mod common {
    //! Parameter specs shared by several families.

    use super::super::catalog::ParamSpec;

    pub const TICKER: ParamSpec =
        ParamSpec::required("ticker", "Ticker symbol", "Ticker symbol (e.g. AAPL)");

    pub const COUNTRY_FILTER: ParamSpec =
        ParamSpec::optional("country", "Filter by country (e.g. america, germany)");

    pub const EXCHANGE_FILTER: ParamSpec =
        ParamSpec::optional("exchange", "Filter by exchange (e.g. NASDAQ, NYSE)");

    pub const START_DATE: ParamSpec =
        ParamSpec::optional("start_date", "Start of the date range (YYYY-MM-DD)");

    pub const END_DATE: ParamSpec =
        ParamSpec::optional("end_date", "End of the date range (YYYY-MM-DD)");

    pub const INTERVAL: ParamSpec =
        ParamSpec::optional("interval", "Price interval (e.g. 1d, 1w, 1m)");

    pub const LIMIT: ParamSpec =
        ParamSpec::optional_number("limit", "Maximum number of results to return");
}
