//! Cosmetic annotations derived from test and class names.
//!
//! These tables only decorate the report; nothing here feeds into counts,
//! outcomes or failure classification.

pub const DEFAULT_EXPECTED: &str = "Test execution completed successfully";

/// A method-name prefix family with its specific sub-patterns.
struct ExpectationGroup {
    keyword: &'static str,
    cases: &'static [(&'static str, &'static str)],
    fallback: &'static str,
}

const EXPECTATIONS: &[ExpectationGroup] = &[
    ExpectationGroup {
        keyword: "ShouldValidate",
        cases: &[
            ("RequiredHeaders", "All required headers validated successfully"),
            ("EndpointStructure", "Endpoint structure and format validated"),
            ("DateFormats", "Date parameter formats validated"),
            ("VersionFormats", "Version parameter formats validated"),
            ("ClinicIdFormats", "Clinic ID parameter formats validated"),
            ("QueryParameters", "Query parameters validated successfully"),
            ("CurlCommandStructure", "Curl command structure validated"),
            ("AuthenticationHeaders", "Authentication headers handled correctly"),
        ],
        fallback: "Validation passed successfully",
    },
    ExpectationGroup {
        keyword: "ShouldReturn",
        cases: &[
            ("InventoryProducts", "200 OK with inventory products data"),
            ("LotNumbersData", "200 OK with lot numbers data"),
            ("LotInventoryData", "200 OK with lot inventory data"),
            ("ClinicData", "200 OK with clinic data"),
            ("InsuranceData", "200 OK with insurance data"),
            ("ProvidersData", "200 OK with providers data"),
            ("ShotAdministratorsData", "200 OK with shot administrators data"),
            ("UsersPartnerLevelData", "200 OK with users partner level data"),
            ("LocationData", "200 OK with location data"),
            ("CheckData", "200 OK with check data response"),
            ("AppointmentData", "200 OK with appointment data"),
            ("AppointmentId", "200 OK with appointment ID returned"),
        ],
        fallback: "200 OK with data returned",
    },
    ExpectationGroup {
        keyword: "ShouldHandle",
        cases: &[
            ("UniquePatientNames", "200 OK with unique patient appointment created"),
            (
                "InvalidAppointmentId",
                "400 Bad Request or appropriate error for invalid appointment ID",
            ),
        ],
        fallback: "Proper handling of scenario",
    },
    ExpectationGroup {
        keyword: "ShouldDemonstrate",
        cases: &[("ResponseLogging", "Response logging demonstrated successfully")],
        fallback: "Demonstration completed successfully",
    },
];

/// Class-name keyword to endpoint. Appointment classes are resolved by method.
const ENDPOINTS: &[(&str, EndpointTarget)] = &[
    ("Inventory", EndpointTarget::Fixed("GET /api/inventory")),
    ("Appointment", EndpointTarget::ByMethod(APPOINTMENT_ENDPOINTS)),
    ("Clinic", EndpointTarget::Fixed("GET /api/patients/clinic")),
    ("Insurance", EndpointTarget::Fixed("GET /api/patients/insurance")),
    ("Staffer", EndpointTarget::Fixed("GET /api/patients/staffer")),
    ("Setup", EndpointTarget::Fixed("GET /api/setup")),
];

const APPOINTMENT_ENDPOINTS: &[(&str, &str)] = &[
    ("Create", "POST /api/patients/appointment"),
    ("Sync", "GET /api/patients/appointment/sync"),
    ("Checkout", "PUT /api/patients/appointment/{id}/checkout"),
];

enum EndpointTarget {
    Fixed(&'static str),
    ByMethod(&'static [(&'static str, &'static str)]),
}

/// Human sentence describing what a passing run of `method_name` looks like.
pub fn expected_result(method_name: &str) -> &'static str {
    EXPECTATIONS
        .iter()
        .find(|group| method_name.contains(group.keyword))
        .map(|group| {
            group
                .cases
                .iter()
                .find(|&&(pattern, _)| method_name.contains(pattern))
                .map_or(group.fallback, |&(_, sentence)| sentence)
        })
        .unwrap_or(DEFAULT_EXPECTED)
}

/// HTTP endpoint exercised by a test, or `""` when the class is not recognised.
///
/// Only the first class keyword that matches is considered, so an appointment
/// class whose method names none of its operations has no endpoint.
pub fn endpoint(class_name: &str, method_name: &str) -> &'static str {
    let Some((_, target)) = ENDPOINTS
        .iter()
        .find(|&&(keyword, _)| class_name.contains(keyword))
    else {
        return "";
    };

    match *target {
        EndpointTarget::Fixed(endpoint) => endpoint,
        EndpointTarget::ByMethod(cases) => cases
            .iter()
            .find(|&&(pattern, _)| method_name.contains(pattern))
            .map_or("", |&(_, endpoint)| endpoint),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Namespace.ClinicTests.ShouldReturn_ClinicData", "200 OK with clinic data")]
    #[test_case("ShouldValidateRequiredHeaders", "All required headers validated successfully")]
    #[test_case("ShouldValidate_Anything", "Validation passed successfully")]
    #[test_case("ShouldReturnAppointmentId", "200 OK with appointment ID returned")]
    #[test_case("ShouldReturnSomething", "200 OK with data returned")]
    #[test_case(
        "ShouldHandleInvalidAppointmentId",
        "400 Bad Request or appropriate error for invalid appointment ID"
    )]
    #[test_case("ShouldHandleRetry", "Proper handling of scenario")]
    #[test_case("ShouldDemonstrateResponseLogging", "Response logging demonstrated successfully")]
    #[test_case("ShouldDemonstrateOther", "Demonstration completed successfully")]
    #[test_case("GetsInventory", DEFAULT_EXPECTED)]
    fn expected_result_table(method: &str, expected: &str) {
        assert_eq!(expected_result(method), expected);
    }

    #[test_case("ClinicTests", "ShouldReturn_ClinicData", "GET /api/patients/clinic")]
    #[test_case("InventoryTests", "Anything", "GET /api/inventory")]
    #[test_case("PatientsAppointmentTests", "Create_Appointment", "POST /api/patients/appointment")]
    #[test_case("AppointmentTests", "ShouldSyncAppointments", "GET /api/patients/appointment/sync")]
    #[test_case("AppointmentTests", "Checkout_Works", "PUT /api/patients/appointment/{id}/checkout")]
    #[test_case("AppointmentTests", "ShouldReturnAppointmentData", "")]
    #[test_case("InsuranceByStateTests", "x", "GET /api/patients/insurance")]
    #[test_case("StafferTests", "x", "GET /api/patients/staffer")]
    #[test_case("SetupLocationDataTests", "x", "GET /api/setup")]
    #[test_case("CalculatorTests", "x", "")]
    fn endpoint_table(class: &str, method: &str, expected: &str) {
        assert_eq!(endpoint(class, method), expected);
    }

    #[test]
    fn inventory_class_wins_over_later_keywords() {
        assert_eq!(endpoint("InventoryClinicTests", "x"), "GET /api/inventory");
    }
}
