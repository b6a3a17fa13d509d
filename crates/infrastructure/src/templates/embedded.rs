//! Embedded page templates - compiled into the binary

pub const LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{% block title %}TripCheck{% endblock title %}</title>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
        .error { color: #a40000; }
        .requirement { border-top: 1px solid #ddd; padding-top: 0.5rem; }
        .meta { color: #666; font-size: 0.9rem; }
    </style>
</head>
<body>
    <h1><a href="/">TripCheck</a></h1>
    {% block content %}{% endblock content %}
</body>
</html>
"#;

pub const ENTRY: &str = r#"{% extends "layout.html" %}
{% block content %}
    <p>Enter two country codes to see the entry requirements for your trip.</p>
    <form action="/searchEntry" method="post">
        <label for="from">From</label>
        <input id="from" name="from" type="text" placeholder="US">
        <label for="destination">To</label>
        <input id="destination" name="destination" type="text" placeholder="FR">
        <button type="submit">Search</button>
    </form>
{% endblock content %}
"#;

pub const RESULT: &str = r#"{% extends "layout.html" %}
{% block title %}{{ trip.origin_name }} to {{ trip.destination_name }} - TripCheck{% endblock title %}
{% block content %}
    <h2>Origin: {{ trip.origin_name }} Destination: {{ trip.destination_name }}</h2>
    {% if trip.status_label %}<h3 class="status">{{ trip.status_label }}</h3>{% endif %}
    {% if trip.summary %}<p>{{ trip.summary }}</p>{% endif %}
    {% if trip.details %}<p>{{ trip.details }}</p>{% endif %}
    {% if trip.start_date %}<p class="meta">In effect from {{ trip.start_date }}{% if trip.end_date %} until {{ trip.end_date }}{% endif %}.</p>{% endif %}
    {% if trip.updated_on %}<p class="meta">Last updated {{ trip.updated_on }}.</p>{% endif %}
    {% for requirement in trip.requirements %}
    <div class="requirement">
        {% if requirement.category %}<h4>{{ requirement.category }}{% if requirement.sub_category %} / {{ requirement.sub_category }}{% endif %}</h4>{% endif %}
        <p>{{ requirement.summary }}</p>
        {% if requirement.details %}<p>{{ requirement.details }}</p>{% endif %}
        {% if requirement.documents %}
        <p>Fill in documents prior to arrival:</p>
        <ul>
            {% for document in requirement.documents %}
            <li>{% if document.url %}<a href="{{ document.url }}">{{ document.label }}</a>{% else %}{{ document.label }}{% endif %}</li>
            {% endfor %}
        </ul>
        {% endif %}
    </div>
    {% endfor %}
    <p><a href="/">Back to search</a></p>
{% endblock content %}
"#;

pub const ERROR: &str = r#"{% extends "layout.html" %}
{% block title %}Lookup failed - TripCheck{% endblock title %}
{% block content %}
    <p class="error">{{ message }}</p>
    <p><a href="/">Back to search</a></p>
{% endblock content %}
"#;
