use nu_ansi_term::Color::Green;
use qpage_aql::AqlQuery;
use qpage_config::config::Config;
use qpage_core::PageParams;
use serde::Serialize;
use tracing::{debug, info};

use crate::{error::CliResult, utils::Colored};

pub struct RenderRequest {
    pub collection: String,
    pub variable: Option<String>,
    pub query: Option<String>,
    pub sort: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub per_page: Option<u64>,
    pub return_value: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Rendered {
    pub query: String,
    pub variable: String,
}

impl RenderRequest {
    /// Parameters from `--query`, overridden by any explicit flag.
    pub fn params(&self) -> CliResult<PageParams> {
        let mut params = match self.query {
            Some(ref query) => PageParams::from_query_str(query)?,
            None => PageParams::default(),
        };

        if let Some(ref sort) = self.sort {
            params.sort = Some(sort.clone());
        }
        if self.page.is_some() {
            params.page = self.page;
        }
        if self.limit.is_some() {
            params.limit = self.limit;
        }
        if self.per_page.is_some() {
            params.per_page = self.per_page;
        }

        Ok(params)
    }
}

pub fn render(config: &Config, request: &RenderRequest) -> CliResult<Rendered> {
    let params = request.params()?;
    debug!("request parameters: {params:?}");

    let variable = request.variable.as_deref().unwrap_or(config.variable());
    let mut query = AqlQuery::for_in(variable, &request.collection)?;
    if let Some(ref expr) = request.return_value {
        query = query.return_value(expr.clone());
    }

    let query = config.paginator()?.apply(query, variable, &params)?;

    Ok(Rendered {
        query: query.to_aql(),
        variable: variable.to_string(),
    })
}

pub fn print_rendered(rendered: &Rendered, json: bool) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rendered)?);
        return Ok(());
    }

    info!("{}", Colored(Green, &rendered.query));
    Ok(())
}
