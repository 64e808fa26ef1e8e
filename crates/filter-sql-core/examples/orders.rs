//! Orders search - building a filtered statement
//!
//! This example demonstrates:
//! - Translating a parsed filter into a WHERE clause
//! - Mapping data-model properties to qualified columns
//! - Sharing one parameter sink with a hand-written paging clause
//!
//! Run with: cargo run --example orders

use filter_sql_core::{
    BinaryOperatorKind, ColumnMap, Expr, ParameterSink, PropertyRef, QueryOptions, SqlValue,
    WhereClause,
};

fn main() -> filter_sql_core::Result<()> {
    // $filter=Status ne 'cancelled' and (contains(tolower(Customer/Name), 'acme')
    //         or Total mul 1.2 gt 500) and ShippedAt eq null
    let filter = Expr::property("Status")
        .ne(Expr::constant("cancelled"))
        .and(
            Expr::call(
                "contains",
                vec![
                    Expr::call(
                        "tolower",
                        vec![Expr::PropertyAccess(PropertyRef::qualified(
                            "Customer", "Name",
                        ))],
                    ),
                    Expr::constant("acme"),
                ],
            )
            .or(Expr::property("Total")
                .binary(BinaryOperatorKind::Multiply, Expr::constant(1.2))
                .gt(Expr::constant(500))),
        )
        .and(Expr::property("ShippedAt").eq(Expr::null()));
    let options = QueryOptions::new().with_filter(filter);

    let columns = ColumnMap::new()
        .with("Status", "[o].[status]")
        .with("Total", "[o].[total]")
        .with("ShippedAt", "[o].[shipped_at]")
        .with("Customer/Name", "[c].[name]");

    let mut params = ParameterSink::default();
    let where_sql = WhereClause::new("where", &mut params, &options)
        .with_resolver(columns)
        .build()?;

    // Paging is assembled by the caller and continues the numbering.
    let offset = params.append_argument(SqlValue::Int(40));
    let fetch = params.append_argument(SqlValue::Int(20));

    println!(
        "SELECT [o].* FROM [orders] AS [o] JOIN [customers] AS [c] ON [c].[id] = [o].[customer_id] \
         {where_sql} ORDER BY [o].[id] OFFSET {offset} ROWS FETCH NEXT {fetch} ROWS ONLY"
    );
    for (index, value) in params.values().iter().enumerate() {
        println!(
            "  {} = {}",
            params.style().render(index),
            value.to_sql_inline()
        );
    }
    Ok(())
}
