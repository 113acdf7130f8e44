use std::fs::File;
use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

#[derive(Serialize)]
struct Product {
    name: &'static str,
    brand: &'static str,
    price: i64,
    rating: f64,
}

fn catalog() -> Vec<Product> {
    vec![
        Product { name: "iphone 15 pro", brand: "apple", price: 999, rating: 4.9 },
        Product { name: "galaxy s23 ultra", brand: "samsung", price: 1199, rating: 4.8 },
        Product { name: "redmi note 12", brand: "xiaomi", price: 199, rating: 4.6 },
        Product { name: "poco x5 pro", brand: "xiaomi", price: 299, rating: 4.4 },
        Product { name: "pixel 8", brand: "google", price: 699, rating: 4.7 },
        Product { name: "oneplus 11", brand: "oneplus", price: 649, rating: 4.5 },
        Product { name: "galaxy a54", brand: "samsung", price: 449, rating: 4.2 },
        Product { name: "iphone se", brand: "apple", price: 429, rating: 4.1 },
    ]
}

fn main() {
    let products = catalog();

    // CSV
    let mut writer =
        csv::Writer::from_path("products.csv").expect("Failed to create products.csv");
    for product in &products {
        writer.serialize(product).expect("Failed to write CSV record");
    }
    writer.flush().expect("Failed to flush products.csv");

    // JSON, records orientation
    let file = File::create("products.json").expect("Failed to create products.json");
    serde_json::to_writer_pretty(file, &products).expect("Failed to write products.json");

    // Parquet
    let schema = Arc::new(Schema::new(vec![
        Field::new("name", DataType::Utf8, false),
        Field::new("brand", DataType::Utf8, false),
        Field::new("price", DataType::Int64, false),
        Field::new("rating", DataType::Float64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from(
                products.iter().map(|p| p.name).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                products.iter().map(|p| p.brand).collect::<Vec<_>>(),
            )),
            Arc::new(Int64Array::from(
                products.iter().map(|p| p.price).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(
                products.iter().map(|p| p.rating).collect::<Vec<_>>(),
            )),
        ],
    )
    .expect("Failed to create RecordBatch");

    let file = File::create("products.parquet").expect("Failed to create products.parquet");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!(
        "Wrote {} products to products.csv / products.json / products.parquet",
        products.len()
    );
}
