// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of GridPlan.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

//! Blocking client for the Energy Made Easy API.

use std::collections::HashSet;
use std::time::Duration;

use gridplan_core::catalog::{PlanCatalog, ProbeOutcome};
use gridplan_core::{CoreError, CoreResult};
use gridplan_types::{CustomerType, Distributor, FuelType, Location, RawPlan};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, ORIGIN, REFERER, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};
use crate::wire::{LocationEnvelope, MetaEnvelope, PlansEnvelope};

pub const DEFAULT_BASE_URL: &str = "https://api.energymadeeasy.gov.au";

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/144.0.0.0 Safari/537.36";
const SITE_ORIGIN: &str = "https://www.energymadeeasy.gov.au";

/// Timeouts match the upstream's observed latency profile: metadata
/// endpoints answer quickly, the plans endpoint can take the better part
/// of a minute for dense postcodes.
const META_TIMEOUT: Duration = Duration::from_secs(30);
const PLANS_TIMEOUT: Duration = Duration::from_secs(60);

pub struct MarketApiClient {
    client: Client,
    base_url: String,
}

impl MarketApiClient {
    pub fn new() -> ApiResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// The API rejects requests without browser-shaped headers, so the
    /// client always presents them.
    pub fn with_base_url(base_url: impl Into<String>) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(ORIGIN, HeaderValue::from_static(SITE_ORIGIN));
        headers.insert(REFERER, HeaderValue::from_static("https://www.energymadeeasy.gov.au/"));

        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str, timeout: Duration) -> ApiResult<T> {
        debug!("GET {}", url);
        let response = self.client.get(url).timeout(timeout).send()?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status(),
                url: url.to_owned(),
            });
        }
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Look up the localities behind a postcode. An empty list means the
    /// postcode does not exist.
    pub fn validate_postcode(&self, postcode: &str) -> ApiResult<Vec<Location>> {
        let url = format!("{}/location/postcodes/{postcode}", self.base_url);
        let envelope: LocationEnvelope = self.get_json(&url, META_TIMEOUT)?;
        Ok(envelope.data)
    }

    /// Candidate distributors for a postcode, deduplicated by id and
    /// sorted by name.
    pub fn fetch_distributors(
        &self,
        postcode: &str,
        fuel: FuelType,
    ) -> ApiResult<Vec<Distributor>> {
        let url = format!(
            "{}/consumerplan/plans/{postcode}/meta?fuelType={}",
            self.base_url,
            fuel.as_code()
        );
        let envelope: MetaEnvelope = self.get_json(&url, META_TIMEOUT)?;

        let mut seen = HashSet::new();
        let mut distributors = Vec::new();
        for item in envelope.data {
            for area in item.plan_data.supply_area {
                let id = area.id.into_string();
                if seen.insert(id.clone()) {
                    distributors.push(Distributor::new(id, area.name));
                }
            }
        }
        distributors.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(distributors)
    }

    /// Count live plans for one distributor. Best-effort: any failure
    /// collapses to [`ProbeOutcome::Unknown`].
    pub fn probe_distributor(
        &self,
        postcode: &str,
        distributor_id: &str,
        fuel: FuelType,
        customer: CustomerType,
    ) -> ProbeOutcome {
        match self.request_plans(postcode, fuel, customer, distributor_id) {
            Ok(plans) => ProbeOutcome::Plans(plans.len()),
            Err(err) => {
                debug!("Probe of distributor {} failed: {}", distributor_id, err);
                ProbeOutcome::Unknown
            }
        }
    }

    /// Full plan list for a postcode, optionally scoped to one
    /// distributor (empty id = no distributor filter).
    pub fn fetch_plans(
        &self,
        postcode: &str,
        fuel: FuelType,
        customer: CustomerType,
        distributor_id: &str,
    ) -> ApiResult<Vec<RawPlan>> {
        let plans = self.request_plans(postcode, fuel, customer, distributor_id)?;
        info!("Fetched {} plans for postcode {}", plans.len(), postcode);
        Ok(plans)
    }

    fn request_plans(
        &self,
        postcode: &str,
        fuel: FuelType,
        customer: CustomerType,
        distributor_id: &str,
    ) -> ApiResult<Vec<RawPlan>> {
        let (dist_e, dist_g) = match fuel {
            FuelType::Electricity => (distributor_id, ""),
            FuelType::Gas => ("", distributor_id),
        };
        let url = format!("{}/consumerplan/plans", self.base_url);
        debug!("GET {} (postcode {}, dist '{}')", url, postcode, distributor_id);

        let response = self
            .client
            .get(&url)
            .timeout(PLANS_TIMEOUT)
            .query(&[
                ("usageDataSource", "noUsageFrontier"),
                ("customerType", customer.as_code()),
                ("distE", dist_e),
                ("distG", dist_g),
                ("fuelType", fuel.as_code()),
                ("journey", fuel.as_code()),
                ("postcode", postcode),
            ])
            .send()?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status(),
                url,
            });
        }
        let body = response.text()?;
        let envelope: PlansEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.data.plans)
    }
}

impl PlanCatalog for MarketApiClient {
    fn discover(&self, postcode: &str, fuel: FuelType) -> CoreResult<Vec<Distributor>> {
        self.fetch_distributors(postcode, fuel)
            .map_err(|err| CoreError::Transport(err.to_string()))
    }

    fn probe(
        &self,
        postcode: &str,
        distributor_id: &str,
        fuel: FuelType,
        customer: CustomerType,
    ) -> ProbeOutcome {
        self.probe_distributor(postcode, distributor_id, fuel, customer)
    }

    fn fetch(
        &self,
        postcode: &str,
        fuel: FuelType,
        customer: CustomerType,
        distributor_id: &str,
    ) -> CoreResult<Vec<RawPlan>> {
        self.fetch_plans(postcode, fuel, customer, distributor_id)
            .map_err(|err| CoreError::Transport(err.to_string()))
    }
}
