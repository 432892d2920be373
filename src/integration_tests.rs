#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::actor_framework::{sequential_ids, Entity};
    use crate::app_system::{AppConfig, ErpSystem};
    use crate::clients::{CustomerClient, EmployeeClient, OrderClient, ProductClient};
    use crate::customer_actor::CustomerError;
    use crate::domain::{
        Customer, CustomerCreate, Employee, Order, OrderStatus, Product, ProductCreate,
        SupplierPatch,
    };
    use crate::lookup::UNKNOWN_LABEL;
    use crate::mock_framework::{
        create_mock_client, expect_action, expect_create, expect_list, expect_update,
    };
    use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
    use crate::pricing::{set_quantity, OrderDraft};
    use crate::store::{JsonFileStore, MemoryStore, RecordStore, CUSTOMERS, SUPPLIERS};

    struct Mocks {
        order_client: OrderClient,
        customer_rx: tokio::sync::mpsc::Receiver<crate::actor_framework::ResourceRequest<Customer>>,
        product_rx: tokio::sync::mpsc::Receiver<crate::actor_framework::ResourceRequest<Product>>,
        order_rx: tokio::sync::mpsc::Receiver<crate::actor_framework::ResourceRequest<Order>>,
    }

    fn mocks() -> Mocks {
        let (customer_inner, customer_rx) = create_mock_client::<Customer>(10);
        let (employee_inner, _employee_rx) = create_mock_client::<Employee>(10);
        let (product_inner, product_rx) = create_mock_client::<Product>(10);
        let (order_inner, order_rx) = create_mock_client::<Order>(10);

        let order_client = OrderClient::new(
            order_inner,
            CustomerClient::new(customer_inner),
            EmployeeClient::new(employee_inner),
            ProductClient::new(product_inner),
        );

        Mocks {
            order_client,
            customer_rx,
            product_rx,
            order_rx,
        }
    }

    fn customer_payload(name: &str) -> CustomerCreate {
        CustomerCreate {
            name: name.to_string(),
            surname: "Souza".to_string(),
            email: "cliente@example.com".to_string(),
            phone: "61987654321".to_string(),
            birth_date: "1990-04-12".to_string(),
            college: "UnB".to_string(),
            course: "Administração".to_string(),
            period: "5".to_string(),
            enrollment: "2021104".to_string(),
            photo_url: "https://example.com/fotos/cliente.png".to_string(),
        }
    }

    fn stored(store: &MemoryStore, collection: &str) -> Vec<serde_json::Value> {
        let raw = store.load(collection).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    fn draft() -> OrderDraft {
        OrderDraft {
            number: "1001".to_string(),
            customer_id: "c1".to_string(),
            employee_id: "e1".to_string(),
            status: OrderStatus::PENDING.to_string(),
            ..OrderDraft::default()
        }
    }

    #[tokio::test]
    async fn test_order_placement_flow() {
        let Mocks {
            order_client,
            mut product_rx,
            mut order_rx,
            ..
        } = mocks();

        // 1. Execute pricing and placement in background
        let order_task = tokio::spawn(async move {
            let mut draft = draft();
            set_quantity(&mut draft, "3");
            order_client.select_product(&mut draft, "P1").await?;
            order_client.place_order(draft).await
        });

        // 2. Verify Interactions

        // Expect Product List
        let responder = expect_list(&mut product_rx).await.expect("Expected Product List");
        responder
            .send(Ok(vec![Product::new("P1", "Caneta", 19.9, 10)]))
            .unwrap();

        // Expect Order Create with the snapshot price and a recomputed total
        let (payload, responder) = expect_create(&mut order_rx).await.expect("Expected Order Create");
        assert_eq!(payload.product_id, "P1");
        assert_eq!(payload.quantity, 3);
        assert_eq!(payload.unit_price, 19.9);
        assert!((payload.total - 59.7).abs() < 1e-9);
        let order = Order::from_create("o1".to_string(), payload).unwrap();
        responder.send(Ok(order.clone())).unwrap();

        // 3. Verify Result
        let result = order_task.await.unwrap();
        assert_eq!(result, Ok(order));
    }

    #[tokio::test]
    async fn test_unknown_product_is_rejected() {
        let Mocks {
            order_client,
            mut product_rx,
            ..
        } = mocks();

        let task = tokio::spawn(async move {
            let mut draft = draft();
            set_quantity(&mut draft, "2");
            let result = order_client.select_product(&mut draft, "gone").await;
            (result, draft)
        });

        let responder = expect_list(&mut product_rx).await.expect("Expected Product List");
        responder
            .send(Ok(vec![Product::new("P1", "Caneta", 19.9, 10)]))
            .unwrap();

        let (result, draft) = task.await.unwrap();
        assert_eq!(result, Err(OrderError::InvalidProduct("gone".to_string())));
        assert!(draft.product_id.is_empty());
        assert_eq!(draft.unit_price, 0.0);
    }

    #[tokio::test]
    async fn test_fractional_quantity_is_rejected() {
        let Mocks {
            order_client,
            mut order_rx,
            ..
        } = mocks();

        let mut fractional = draft();
        fractional.product_id = "P1".to_string();
        fractional.unit_price = 10.0;
        set_quantity(&mut fractional, "2.5");
        assert_eq!(fractional.total, 25.0);

        let result = order_client.place_order(fractional.clone()).await;
        assert!(matches!(result, Err(OrderError::ValidationError(ref m)) if m.contains("quantity")));

        let result = order_client.update_order("o1".to_string(), fractional).await;
        assert!(matches!(result, Err(OrderError::ValidationError(_))));

        // Nothing reached the actor.
        drop(order_client);
        assert!(order_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_set_status_flow() {
        let Mocks {
            order_client,
            mut order_rx,
            ..
        } = mocks();

        let task = tokio::spawn(async move {
            order_client
                .set_status("o1".to_string(), OrderStatus::Completed)
                .await
        });

        let (id, action, responder) = expect_action(&mut order_rx).await.expect("Expected Order Action");
        assert_eq!(id, "o1");
        assert_eq!(action, OrderAction::SetStatus(OrderStatus::Completed));
        responder
            .send(Ok(OrderActionResult::SetStatus(OrderStatus::Pending)))
            .unwrap();

        assert_eq!(task.await.unwrap(), Ok(OrderStatus::Pending));
    }

    #[tokio::test]
    async fn test_update_recomputes_total() {
        let Mocks {
            order_client,
            mut order_rx,
            ..
        } = mocks();

        let task = tokio::spawn(async move {
            let mut edited = draft();
            edited.unit_price = 2.5;
            edited.total = 999.0;
            set_quantity(&mut edited, "4");
            order_client.update_order("o1".to_string(), edited).await
        });

        let (id, patch, responder) = expect_update(&mut order_rx).await.expect("Expected Order Update");
        assert_eq!(id, "o1");
        assert_eq!(patch.quantity, 4);
        assert_eq!(patch.total, 10.0);
        let mut order = Order::from_create("o1".to_string(), patch.clone()).unwrap();
        order.on_update(patch).unwrap();
        responder.send(Ok(order.clone())).unwrap();

        assert_eq!(task.await.unwrap(), Ok(order));
    }

    #[tokio::test]
    async fn test_report_flow() {
        let Mocks {
            order_client,
            mut customer_rx,
            mut order_rx,
            ..
        } = mocks();

        let task = tokio::spawn(async move { order_client.report().await });

        let responder = expect_list(&mut order_rx).await.expect("Expected Order List");
        let order = |id: &str, customer: &str, status: OrderStatus| Order {
            id: id.to_string(),
            customer_id: customer.to_string(),
            quantity: 1,
            unit_price: 10.0,
            total: Some(10.0),
            status,
            ..Order::default()
        };
        responder
            .send(Ok(vec![
                order("o1", "c1", OrderStatus::Pending),
                order("o2", "c1", OrderStatus::Pending),
                order("o3", "deleted", OrderStatus::Completed),
            ]))
            .unwrap();

        let responder = expect_list(&mut customer_rx).await.expect("Expected Customer List");
        responder
            .send(Ok(vec![Customer {
                id: "c1".to_string(),
                name: "Ana".to_string(),
                ..Customer::default()
            }]))
            .unwrap();

        let report = task.await.unwrap().unwrap();
        assert_eq!(report.by_status.get(OrderStatus::PENDING), Some(&2));
        assert_eq!(report.by_status.get(OrderStatus::COMPLETED), Some(&1));
        assert_eq!(report.by_customer.totals.get("Ana"), Some(&20.0));
        assert_eq!(report.by_customer.totals.get(UNKNOWN_LABEL), Some(&10.0));
    }

    #[tokio::test]
    async fn test_orders_survive_restart_and_price_edits() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        };

        let system = ErpSystem::open(&config).unwrap();
        let customer = system
            .customer_client
            .create_customer(customer_payload("Ana"))
            .await
            .unwrap();
        let product = system
            .product_client
            .create_product(ProductCreate {
                code: "CAN-01".to_string(),
                name: "Caneta".to_string(),
                description: "Caneta azul".to_string(),
                category: "Papelaria".to_string(),
                stock: 10,
                unit_price: 19.9,
                supplier_id: "s1".to_string(),
                registered_on: "2024-03-01".to_string(),
            })
            .await
            .unwrap();

        let mut order_draft = draft();
        order_draft.customer_id = customer.id.clone();
        set_quantity(&mut order_draft, "3");
        system
            .order_client
            .select_product(&mut order_draft, &product.id)
            .await
            .unwrap();
        let order = system.order_client.place_order(order_draft).await.unwrap();

        system
            .product_client
            .set_price(product.id.clone(), 30.0)
            .await
            .unwrap();
        system.shutdown().await.unwrap();

        // A fresh system over the same directory sees the same records.
        let reopened = ErpSystem::with_ids(
            Arc::new(JsonFileStore::open(dir.path()).unwrap()),
            4,
            sequential_ids,
        );
        let saved = reopened
            .order_client
            .get_order(order.id.clone())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(saved.number, order.number);
        assert_eq!(saved.unit_price, 19.9);
        assert!((saved.total.unwrap() - 59.7).abs() < 1e-9);

        let edit = reopened.order_client.edit_draft(order.id.clone()).await.unwrap();
        assert_eq!(edit.quantity, "3");
        assert_eq!(edit.unit_price, 19.9);

        let report = reopened.order_client.report().await.unwrap();
        assert_eq!(report.rows[0].customer, "Ana");
        assert_eq!(report.rows[0].total, "59.70");
        assert!(report.by_customer.issues.is_empty());

        let listing = reopened.order_client.listing().await.unwrap();
        assert_eq!(listing[0].product, "Caneta");
        assert_eq!(listing[0].employee, UNKNOWN_LABEL);

        reopened.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_update_keeps_unmodelled_keys_on_every_record() {
        let store = Arc::new(MemoryStore::new());
        store
            .save(
                SUPPLIERS,
                r#"[
                    {"id":"s1","empresa":"A","cnpj":"1","email":"a@a.com","cidade":"X","estado":"53",
                     "endereco":"Rua 1","servicoEspecializado":"Gráfica","observacao":"vip","prazoEntrega":5},
                    {"id":"s2","empresa":"B","cnpj":"2","email":"b@b.com","cidade":"Y","estado":"35",
                     "endereco":"Rua 2","servicoEspecializado":"Papel","observacao":"novo","prazoEntrega":3}
                ]"#
                .to_string(),
            )
            .unwrap();
        let system = ErpSystem::with_ids(store.clone(), 4, sequential_ids);

        let updated = system
            .supplier_client
            .update_supplier(
                "s1".to_string(),
                SupplierPatch {
                    company: Some("A2".to_string()),
                    ..SupplierPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.address, "Rua 1");
        system.shutdown().await.unwrap();

        let saved = stored(&store, SUPPLIERS);
        assert_eq!(saved[0]["empresa"], "A2");
        assert_eq!(saved[0]["endereco"], "Rua 1");
        assert_eq!(saved[0]["observacao"], "vip");
        assert_eq!(saved[1]["empresa"], "B");
        assert_eq!(saved[1]["endereco"], "Rua 2");
        assert_eq!(saved[1]["servicoEspecializado"], "Papel");
        assert_eq!(saved[1]["observacao"], "novo");
    }

    #[tokio::test]
    async fn test_create_keeps_records_with_null_fields() {
        let store = Arc::new(MemoryStore::new());
        store
            .save(
                CUSTOMERS,
                r#"[{"id":"c1","nome":"Ana","email":"ana@example.com"},{"id":"c2","nome":null}]"#
                    .to_string(),
            )
            .unwrap();
        let system = ErpSystem::with_ids(store.clone(), 4, sequential_ids);

        system
            .customer_client
            .create_customer(customer_payload("Rui"))
            .await
            .unwrap();
        let names: Vec<_> = system
            .customer_client
            .list_customers()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Ana", "", "Rui"]);
        system.shutdown().await.unwrap();

        let ids: Vec<_> = stored(&store, CUSTOMERS)
            .iter()
            .map(|c| c["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["c1", "c2", "clientes_1"]);
    }

    #[tokio::test]
    async fn test_corrupt_collection_is_never_overwritten() {
        let store = Arc::new(MemoryStore::new());
        store.save(CUSTOMERS, "[{\"id\":\"c1\",".to_string()).unwrap();
        let system = ErpSystem::with_ids(store.clone(), 4, sequential_ids);

        let result = system
            .customer_client
            .create_customer(customer_payload("Rui"))
            .await;
        assert!(matches!(result, Err(CustomerError::DatabaseError(_))));
        system.shutdown().await.unwrap();

        assert_eq!(
            store.load(CUSTOMERS).unwrap().as_deref(),
            Some("[{\"id\":\"c1\",")
        );
    }
}
