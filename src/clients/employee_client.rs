use crate::employee_actor::EmployeeError;
use crate::actor_framework::ResourceClient;
use crate::domain::Employee;

/// Client for interacting with the Employee actor.
#[derive(Clone)]
pub struct EmployeeClient {
    inner: ResourceClient<Employee>,
}

crate::impl_basic_client!(EmployeeClient, Employee, EmployeeError, employee);
