// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.
//
// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

//! Algorithm parameter declaration and binding
//!
//! Algorithms declare their parameters as requirements with a setting type and
//! an admissible setting count. The frontend binds user input to each
//! requirement through a validating setter, and the factory turns the bound
//! requirements into the typed configuration an algorithm run receives.
//!
//! The flow is declare, bind, build: a requirement never carries an
//! inadmissible number of settings, and a configuration value only exists for
//! requirements whose settings passed validation.

pub mod error;
pub mod factory;
pub mod requirement;
pub mod setting;
pub mod value;

// Public exports
pub use error::{ConfigurationError, ConfigurationResult};
pub use factory::ConfigurationFactory;
pub use requirement::{ConfigurationRequirement, Requirement};
pub use setting::{
    BooleanSetting, DatabaseConnectionSetting, DbSystem, FileInputSetting, IntegerSetting,
    ListBoxSetting, RelationalInputSetting, StringSetting, TableInputSetting,
};
pub use value::{Configuration, ConfigurationValue, ValuePayload};
