diesel::table! {
    customers (customer_id) {
        customer_id -> Int4,
        first_name -> Varchar,
        last_name -> Varchar,
        email -> Nullable<Varchar>,
    }
}

diesel::table! {
    employees (employee_id) {
        employee_id -> Int4,
        first_name -> Varchar,
        last_name -> Varchar,
        role -> Varchar,
    }
}

diesel::table! {
    inventory (inventory_id) {
        inventory_id -> Int4,
        item_name -> Varchar,
        current_stock -> Int4,
        reorder_level -> Int4,
        unit -> Varchar,
        supplier_name -> Varchar,
    }
}

diesel::table! {
    menu (menu_item_id) {
        menu_item_id -> Int4,
        item_name -> Varchar,
        price -> Numeric,
        description -> Nullable<Text>,
    }
}

diesel::table! {
    order_details (order_detail_id) {
        order_detail_id -> Int4,
        order_id -> Int4,
        menu_item_id -> Int4,
        quantity -> Int4,
        price_at_purchase -> Numeric,
    }
}

diesel::table! {
    orders (order_id) {
        order_id -> Int4,
        customer_id -> Nullable<Int4>,
        employee_id -> Nullable<Int4>,
        order_time -> Timestamptz,
        total_amount -> Numeric,
        order_status -> Varchar,
    }
}

diesel::joinable!(order_details -> menu (menu_item_id));
diesel::joinable!(order_details -> orders (order_id));
diesel::joinable!(orders -> customers (customer_id));
diesel::joinable!(orders -> employees (employee_id));

diesel::allow_tables_to_appear_in_same_query!(
    customers,
    employees,
    inventory,
    menu,
    order_details,
    orders,
);
