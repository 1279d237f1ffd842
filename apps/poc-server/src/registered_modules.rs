use std::sync::Arc;

use calculator::CalculatorModule;
use poc_api::RestApiModule;
use users_info::UsersInfoModule;

/// Modules served behind the API gateway, in registration order.
pub fn rest_modules() -> Vec<Arc<dyn RestApiModule>> {
    vec![
        Arc::new(CalculatorModule::new()),
        Arc::new(UsersInfoModule::new()),
    ]
}
