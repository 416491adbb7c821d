mod default_icon;
