// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    panic::{self, AssertUnwindSafe},
    time::Instant,
};

use log::{debug, error, warn};
use rayon::prelude::*;

use super::{
    helper_constants::{DEFAULT_PARALLELISM, INTERNAL_ERROR_MESSAGE},
    mobile_validator::MobileValidator,
    types::{BatchRequest, BatchResult, BatchStats, ValidationOptions, ValidationResult},
};
use crate::i18n::CountryCode;

/// Result of one batch item plus whether it did not complete normally.
type BatchItem = (ValidationResult, bool);

impl MobileValidator {
    /// Validates every phone with country detection. `results[i]` always
    /// belongs to `phones[i]`; a failing item never affects the others.
    ///
    /// At most `parallelism` validations run at once. Non-positive values
    /// select the default of ten, and the performance configuration caps
    /// the pool size.
    pub fn validate_batch<S>(
        &self,
        phones: &[S],
        parallelism: i32,
        options: Option<&ValidationOptions>,
    ) -> BatchResult
    where
        S: AsRef<str> + Sync,
    {
        let started = Instant::now();
        let default_options = ValidationOptions::default();
        let options = options.unwrap_or(&default_options);
        let workers = self.batch_workers(parallelism);
        debug!("Validating a batch of {} phones with {} workers", phones.len(), workers);

        let items: Vec<BatchItem> = match rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
        {
            Ok(pool) => pool.install(|| {
                phones
                    .par_iter()
                    .map(|phone| self.validate_batch_item(phone.as_ref(), options))
                    .collect()
            }),
            Err(err) => {
                warn!("Could not build the batch pool, validating sequentially: {}", err);
                phones
                    .iter()
                    .map(|phone| self.validate_batch_item(phone.as_ref(), options))
                    .collect()
            }
        };

        let mut stats = BatchStats {
            total: items.len(),
            ..Default::default()
        };
        let mut results = Vec::with_capacity(items.len());
        for (result, failed) in items {
            if failed {
                stats.errors += 1;
            }
            if result.is_valid {
                stats.valid += 1;
                *stats.by_country.entry(result.country_code.clone()).or_insert(0) += 1;
            } else {
                stats.invalid += 1;
            }
            results.push(result);
        }

        BatchResult {
            results,
            stats,
            processing_time: started.elapsed(),
        }
    }

    pub fn validate_batch_request(&self, request: &BatchRequest) -> BatchResult {
        self.validate_batch(&request.phones, request.parallelism, request.options.as_ref())
    }

    fn batch_workers(&self, parallelism: i32) -> usize {
        let requested = usize::try_from(parallelism)
            .ok()
            .filter(|&workers| workers > 0)
            .unwrap_or(DEFAULT_PARALLELISM);
        let limit = self.performance_config().max_concurrent_validations.max(1);
        requested.min(limit)
    }

    fn validate_batch_item(&self, phone: &str, options: &ValidationOptions) -> BatchItem {
        match panic::catch_unwind(AssertUnwindSafe(|| {
            self.validate_with_options(phone, "", options)
        })) {
            Ok(result) => (result, false),
            Err(_) => {
                error!("Validation of {:?} panicked", phone);
                let unknown = CountryCode::get_unknown();
                let result = ValidationResult::invalid(phone, unknown, INTERNAL_ERROR_MESSAGE);
                (result, true)
            }
        }
    }
}
