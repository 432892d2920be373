use std::error::Error;

use tracing::{error, info, Instrument};

use micro_erp::app_system::{setup_tracing, AppConfig, ErpSystem};
use micro_erp::domain::{CustomerCreate, EmployeeCreate, OrderStatus, ProductCreate, SupplierCreate};
use micro_erp::locality::{states_or_empty, IbgeLocalityClient, StateNames};
use micro_erp::pricing::{format_currency, set_quantity, OrderDraft};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;

    // Setup tracing once for the entire application
    setup_tracing();

    info!(data_dir = %config.data_dir.display(), "Starting micro ERP");

    let system = ErpSystem::open(&config)?;

    let supplier = system
        .supplier_client
        .create_supplier(SupplierCreate {
            company: "Papelaria Central".to_string(),
            cnpj: "12345678000190".to_string(),
            email: "contato@papelariacentral.com.br".to_string(),
            phone: "6133334444".to_string(),
            address: "SCS Quadra 2, Bloco C".to_string(),
            city: "Brasília".to_string(),
            state: "53".to_string(),
            category: "Papelaria".to_string(),
            specialized_service: "Material de escritório".to_string(),
            delivery_days: 5,
        })
        .await?;

    let product = system
        .product_client
        .create_product(ProductCreate {
            code: "CAN-01".to_string(),
            name: "Caneta esferográfica".to_string(),
            description: "Caixa com 50 unidades".to_string(),
            category: "Papelaria".to_string(),
            stock: 120,
            unit_price: 19.9,
            supplier_id: supplier.id.clone(),
            registered_on: "2024-03-01".to_string(),
        })
        .await?;

    let customer = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Ana".to_string(),
            surname: "Souza".to_string(),
            email: "ana.souza@example.com".to_string(),
            phone: "61987654321".to_string(),
            birth_date: "1990-04-12".to_string(),
            college: "UnB".to_string(),
            course: "Administração".to_string(),
            period: "5".to_string(),
            enrollment: "2021104".to_string(),
            photo_url: "https://example.com/fotos/ana.png".to_string(),
        })
        .await?;

    let employee = system
        .employee_client
        .create_employee(EmployeeCreate {
            name: "Carlos".to_string(),
            surname: "Lima".to_string(),
            role: "Vendedor".to_string(),
            email: "carlos.lima@example.com".to_string(),
            phone: "61912345678".to_string(),
            birth_date: "1985-07-20".to_string(),
            city: "Brasília".to_string(),
            state: "53".to_string(),
        })
        .await?;

    // Fill the order form the way a user would: product first, then quantity.
    let mut draft = OrderDraft {
        number: "1001".to_string(),
        customer_id: customer.id.clone(),
        employee_id: employee.id.clone(),
        status: OrderStatus::PENDING.to_string(),
        ..OrderDraft::default()
    };

    let span = tracing::info_span!("order_processing");
    let placed = async {
        system.order_client.select_product(&mut draft, &product.id).await?;
        let total = set_quantity(&mut draft, "3");
        info!(total = %format_currency(total), "Draft priced");
        system.order_client.place_order(draft).await
    }
    .instrument(span)
    .await;

    match &placed {
        Ok(order) => {
            info!(order_id = %order.id, "Order processed successfully");
            system
                .order_client
                .set_status(order.id.clone(), OrderStatus::InProgress)
                .await?;
        }
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    let report = system.order_client.report().await?;
    println!("{}", report.to_json()?);

    let locality = IbgeLocalityClient::new(config.locality_url.clone(), config.locality_timeout)?;
    let states = StateNames::new(&states_or_empty(&locality).await);
    for row in system.employee_listing(&states).await? {
        info!(name = %row.name, phone = %row.phone, state = %row.state, "Employee");
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
