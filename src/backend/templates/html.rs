//! Built-in HTML renderer
//!
//! Produces self-contained pages from a context object. Missing keys render
//! as empty lists or blank text, so a context only needs what the page uses.

use serde_json::Value;

use super::{escape_html, RenderError, Renderer, Template};

/// Default renderer used by the server binary
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, template: Template, context: &Value) -> Result<String, RenderError> {
        if !context.is_object() {
            return Err(RenderError::template(
                template.name(),
                "context must be a JSON object",
            ));
        }

        let (title, body) = match template {
            Template::Index => ("Reviews", index(context)),
            Template::Restaurants => ("Restaurants", restaurants(context)),
            Template::RestaurantInfo => ("Restaurant", restaurant_info(context)),
            Template::AddRestaurant => ("Add Restaurant", add_restaurant(context)),
            Template::AddReview => ("Add Review", add_review(context)),
            Template::AddDish => ("Add Dish", add_dish(context)),
            Template::Dishes => ("Dishes", dishes(context)),
            Template::Login => ("Login", login(context)),
            Template::Register => ("Register", register(context)),
        };

        let nav = match template {
            Template::Login | Template::Register => "",
            _ => NAV,
        };

        Ok(format!(
            "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
             <body>\n{nav}<h1>{title}</h1>\n{body}</body>\n</html>\n"
        ))
    }
}

const NAV: &str = "<nav><a href=\"/\">Reviews</a> | <a href=\"/restaurant\">Restaurants</a> | \
<a href=\"/dishes\">Dishes</a> | <a href=\"/add_review\">Add Review</a> | \
<a href=\"/add_restaurant\">Add Restaurant</a> | <a href=\"/add_dish\">Add Dish</a> | \
<a href=\"/logout\">Logout</a></nav>\n";

/// Display a scalar context value as escaped text
fn text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => escape_html(s),
        other => escape_html(&other.to_string()),
    }
}

fn field(item: &Value, key: &str) -> String {
    text(item.get(key).unwrap_or(&Value::Null))
}

/// Average rating, with an unreviewed restaurant shown as a plain `0`
fn rating(item: &Value) -> String {
    match item.get("avg_rating") {
        Some(value) if value.as_f64() == Some(0.0) => "0".to_string(),
        Some(value) => text(value),
        None => String::new(),
    }
}

fn list<'a>(context: &'a Value, key: &str) -> &'a [Value] {
    context
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn message(context: &Value) -> String {
    match context.get("message") {
        Some(Value::String(m)) if !m.is_empty() => {
            format!("<p class=\"message\">{}</p>\n", escape_html(m))
        }
        _ => String::new(),
    }
}

fn allergen_names(item: &Value) -> String {
    list(item, "allergens")
        .iter()
        .map(text)
        .collect::<Vec<_>>()
        .join(", ")
}

fn options(items: &[Value], id_key: &str, label_key: &str, selected: &str) -> String {
    items
        .iter()
        .map(|item| {
            let id = field(item, id_key);
            let marker = if !selected.is_empty() && id == selected {
                " selected"
            } else {
                ""
            };
            format!(
                "<option value=\"{id}\"{marker}>{}</option>",
                field(item, label_key)
            )
        })
        .collect()
}

fn reviews_table(reviews: &[Value], with_restaurant: bool) -> String {
    if reviews.is_empty() {
        return "<p>No reviews yet.</p>\n".to_string();
    }
    let mut html = String::from("<table>\n<tr><th>User</th>");
    if with_restaurant {
        html.push_str("<th>Restaurant</th>");
    }
    html.push_str("<th>Rating</th><th>Review</th><th>Posted</th></tr>\n");
    for review in reviews {
        html.push_str(&format!("<tr><td>{}</td>", field(review, "user")));
        if with_restaurant {
            html.push_str(&format!("<td>{}</td>", field(review, "restaurant")));
        }
        html.push_str(&format!(
            "<td>{}</td><td>{}</td><td>{}</td></tr>\n",
            field(review, "rating"),
            field(review, "text"),
            field(review, "timestamp"),
        ));
    }
    html.push_str("</table>\n");
    html
}

fn index(context: &Value) -> String {
    reviews_table(list(context, "data"), true)
}

fn restaurants(context: &Value) -> String {
    let mut html = format!(
        "<form method=\"get\" action=\"/restaurant\">\
         <input name=\"search\" placeholder=\"Search by name\" value=\"{}\">\
         <input name=\"rating\" type=\"number\" step=\"0.1\" min=\"0\" max=\"5\" placeholder=\"Min rating\" value=\"{}\">\
         <button type=\"submit\">Filter</button></form>\n",
        field(context, "search"),
        field(context, "rating"),
    );
    let rows = list(context, "data");
    if rows.is_empty() {
        html.push_str("<p>No restaurants found.</p>\n");
        return html;
    }
    html.push_str(
        "<table>\n<tr><th>Name</th><th>Address</th><th>Cuisine</th><th>Rating</th><th>Reviews</th></tr>\n",
    );
    for r in rows {
        html.push_str(&format!(
            "<tr><td><a href=\"/restaurant/{}\">{}</a></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            field(r, "id"),
            field(r, "name"),
            field(r, "address"),
            field(r, "cuisine"),
            rating(r),
            field(r, "review_count"),
        ));
    }
    html.push_str("</table>\n");
    html
}

fn restaurant_info(context: &Value) -> String {
    let restaurant = context.get("restaurant").unwrap_or(&Value::Null);
    let mut html = format!(
        "<h2>{}</h2>\n<p>{} &middot; {}</p>\n<p>Average rating {} from {} reviews</p>\n",
        field(restaurant, "name"),
        field(restaurant, "address"),
        field(restaurant, "cuisine"),
        rating(restaurant),
        field(restaurant, "review_count"),
    );

    html.push_str("<h3>Dishes</h3>\n");
    let dishes = list(context, "dishes");
    if dishes.is_empty() {
        html.push_str("<p>No dishes listed.</p>\n");
    } else {
        html.push_str(
            "<table>\n<tr><th>Dish</th><th>Description</th><th>Price</th><th>Allergens</th></tr>\n",
        );
        for d in dishes {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                field(d, "name"),
                field(d, "description"),
                field(d, "price"),
                allergen_names(d),
            ));
        }
        html.push_str("</table>\n");
    }

    html.push_str("<h3>Reviews</h3>\n");
    html.push_str(&reviews_table(list(context, "reviews"), false));
    html
}

fn add_restaurant(context: &Value) -> String {
    format!(
        "{}<form method=\"post\" action=\"/add_restaurant\">\
         <input name=\"name\" placeholder=\"Name\" required>\
         <input name=\"address\" placeholder=\"Address\">\
         <input name=\"cuisine\" placeholder=\"Cuisine\">\
         <button type=\"submit\">Add</button></form>\n",
        message(context)
    )
}

fn add_review(context: &Value) -> String {
    format!(
        "{}<form method=\"post\" action=\"/add_review\">\
         <select name=\"restaurant\">{}</select>\
         <input name=\"rating\" type=\"number\" min=\"1\" max=\"5\" required>\
         <textarea name=\"text\"></textarea>\
         <button type=\"submit\">Submit</button></form>\n",
        message(context),
        options(list(context, "data"), "id", "name", ""),
    )
}

fn add_dish(context: &Value) -> String {
    let allergens: String = list(context, "allergens")
        .iter()
        .map(|a| {
            format!(
                "<label><input type=\"checkbox\" name=\"allergens\" value=\"{}\">{}</label>",
                field(a, "allergen_id"),
                field(a, "allergen_name"),
            )
        })
        .collect();
    format!(
        "{}<form method=\"post\" action=\"/add_dish\">\
         <input name=\"name\" placeholder=\"Name\" required>\
         <input name=\"description\" placeholder=\"Description\">\
         <select name=\"restaurant\">{}</select>\
         <input name=\"price\" type=\"number\" step=\"0.01\" min=\"0\" placeholder=\"Price\">\
         <fieldset><legend>Allergens</legend>{}</fieldset>\
         <button type=\"submit\">Add</button></form>\n",
        message(context),
        options(list(context, "restaurants"), "restaurant_id", "name", ""),
        allergens,
    )
}

fn dishes(context: &Value) -> String {
    let mut html = format!(
        "<form method=\"get\" action=\"/dishes\">\
         <input name=\"search\" placeholder=\"Search dishes\" value=\"{}\">\
         <select name=\"restaurant\"><option value=\"\">All restaurants</option>{}</select>\
         <select name=\"allergen\"><option value=\"\">Exclude allergen</option>{}</select>\
         <button type=\"submit\">Filter</button></form>\n",
        field(context, "search"),
        options(
            list(context, "restaurants"),
            "restaurant_id",
            "name",
            &field(context, "restaurant"),
        ),
        options(
            list(context, "allergens"),
            "allergen_id",
            "allergen_name",
            &field(context, "allergen"),
        ),
    );
    let rows = list(context, "data");
    if rows.is_empty() {
        html.push_str("<p>No dishes found.</p>\n");
        return html;
    }
    html.push_str(
        "<table>\n<tr><th>Dish</th><th>Description</th><th>Restaurant</th><th>Price</th><th>Allergens</th></tr>\n",
    );
    for d in rows {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td><a href=\"/restaurant/{}\">{}</a></td><td>{}</td><td>{}</td></tr>\n",
            field(d, "name"),
            field(d, "description"),
            field(d, "restaurant_id"),
            field(d, "restaurant"),
            field(d, "price"),
            allergen_names(d),
        ));
    }
    html.push_str("</table>\n");
    html
}

fn login(context: &Value) -> String {
    format!(
        "{}<form method=\"post\" action=\"/login\">\
         <input name=\"username\" placeholder=\"Username\" required>\
         <input name=\"password\" type=\"password\" placeholder=\"Password\" required>\
         <button type=\"submit\">Log in</button></form>\n\
         <p><a href=\"/register\">Create an account</a></p>\n",
        message(context)
    )
}

fn register(context: &Value) -> String {
    format!(
        "{}<form method=\"post\" action=\"/register\">\
         <input name=\"username\" placeholder=\"Username\" required>\
         <input name=\"email\" type=\"email\" placeholder=\"Email\">\
         <input name=\"password\" type=\"password\" placeholder=\"Password\" required>\
         <button type=\"submit\">Register</button></form>\n\
         <p><a href=\"/login\">Back to login</a></p>\n",
        message(context)
    )
}
