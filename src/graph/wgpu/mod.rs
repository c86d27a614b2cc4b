mod diameter;
